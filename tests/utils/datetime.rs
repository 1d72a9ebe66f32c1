use chrono::{Datelike, Local};
use pm_widgets::utils::datetime::current_year;

#[test]
fn test_current_year_matches_local_clock() {
    assert_eq!(current_year(), Local::now().year());
}
