use minijinja::Environment;
use navstyle::render::register_nav_functions;
use navstyle::{set_color_mode_detector, ColorMode, RenderFacts};
use serial_test::serial;

const NAV_TEMPLATE: &str = r#"<nav class="{{ nav_class('desktop') }}">
{%- for item in items %}
<a class="{{ nav_class('menuItem', active=(item.id == current)) }}">{{ item.label }}</a>
{%- endfor %}
<button class="{{ nav_class('themeToggle') }}"><i class="{{ nav_class('themeToggleIcon', label='Sun') }}"></i></button>
</nav>"#;

fn render_nav(base: RenderFacts, current: &str) -> String {
    let mut env = Environment::new();
    register_nav_functions(&mut env, base);
    env.add_template("nav", NAV_TEMPLATE).unwrap();
    let ctx = serde_json::json!({
        "current": current,
        "items": [
            {"id": "home", "label": "Home"},
            {"id": "docs", "label": "Docs"},
        ],
    });
    env.get_template("nav").unwrap().render(ctx).unwrap()
}

fn line_for<'a>(html: &'a str, label: &str) -> &'a str {
    html.lines()
        .find(|line| line.contains(&format!(">{}<", label)))
        .unwrap()
}

#[test]
fn only_the_current_item_gets_the_indicator() {
    let html = render_nav(RenderFacts::new().at_width(1280), "docs");

    assert!(!line_for(&html, "Home").contains("before:"));
    assert!(line_for(&html, "Docs").contains("laptop:data-[active=true]:before:top-[-24px]"));
    assert!(html.contains("laptop:flex"));
}

#[test]
fn narrow_viewport_drops_breakpoint_classes() {
    let html = render_nav(RenderFacts::new().at_width(480), "docs");
    assert!(!html.contains("laptop:"));
}

#[test]
#[serial]
fn detected_dark_mode_hides_the_sun_icon() {
    set_color_mode_detector(|| ColorMode::Dark);
    let html = render_nav(RenderFacts::detect(), "home");
    set_color_mode_detector(|| ColorMode::Light);

    assert!(html.contains("dark-theme:aria-[label=Sun]:opacity-0"));
}

#[test]
#[serial]
fn detected_light_mode_shows_the_sun_icon() {
    set_color_mode_detector(|| ColorMode::Light);
    let html = render_nav(RenderFacts::detect(), "home");

    assert!(!html.contains("opacity-0"));
}
