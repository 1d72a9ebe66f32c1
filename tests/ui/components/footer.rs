use crate::buffer_text;
use pm_widgets::ui::components::Footer;
use pm_widgets::ui::core::Component;
use pm_widgets::utils::datetime::current_year;
use ratatui::{backend::TestBackend, Terminal};

#[test]
fn test_footer_defaults() {
    let footer = Footer::default();
    assert_eq!(footer.brand(), "Project Management Team");
    assert!(footer.route_labels().is_empty());
    assert_eq!(footer.height(), 2);
}

#[test]
fn test_copyright_line_format() {
    let footer = Footer::new().brand_name("Acme");
    assert_eq!(footer.copyright_line(2024), "© 2024 Acme. All rights reserved.");
}

#[test]
fn test_footer_defaults_render() {
    let mut footer = Footer::new();
    let mut terminal = Terminal::new(TestBackend::new(80, 2)).unwrap();

    terminal.draw(|f| footer.render(f, f.area())).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    let expected = format!("© {} Project Management Team. All rights reserved.", current_year());
    assert!(text.contains(&expected), "missing copyright in:\n{}", text);
}

#[test]
fn test_footer_renders_route_labels() {
    let mut footer = Footer::new().routes(vec!["Home".to_string(), "Reports".to_string()]);
    assert_eq!(footer.height(), 3);

    let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
    terminal.draw(|f| footer.render(f, f.area())).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Home"));
    assert!(text.contains("Reports"));
}

#[test]
fn test_footer_is_not_focusable() {
    assert!(!Footer::new().is_focusable());
}
