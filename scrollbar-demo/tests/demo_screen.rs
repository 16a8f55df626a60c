use scrollbar_config::ScrollbarConfig;
use scrollbar_demo::{DemoScreen, session};
use scrollbar_model::{Point, Rect, Size, SizingPolicy};

fn phone() -> Rect {
    Rect::new(0.0, 0.0, 390.0, 844.0)
}

fn screen() -> DemoScreen {
    DemoScreen::new(&ScrollbarConfig::default(), 7)
}

#[test]
fn layout_stacks_the_carousels_and_keeps_the_image_aspect() {
    let mut screen = screen();
    screen.layout_subviews(phone());

    assert_eq!(screen.text.frame(), Rect::new(0.0, 100.0, 390.0, 100.0));
    assert_eq!(screen.text.item_size(), Size::new(150.0, 100.0));

    // 195pt wide items on the full screen, 0.7 of that high.
    assert_eq!(screen.images.frame(), Rect::new(0.0, 300.0, 390.0, 136.5));
    assert_eq!(screen.images.item_size(), Size::new(125.0, 136.5));
    assert_eq!(
        screen.images.provider().image_size,
        Size::new(195.0, 136.5)
    );
}

#[test]
fn visible_items_are_realized_with_their_content() {
    let mut screen = screen();
    screen.layout_subviews(phone());

    let texts = screen.text.realized_items();
    assert_eq!(texts.len(), 2);
    assert!(format!("{:?}", texts[0].item).contains("1 and some more text"));

    let images = screen.images.realized_items();
    assert_eq!(images.len(), 2);
    assert!(format!("{:?}", images[1].item).contains(r#"label: "2""#));
}

#[test]
fn taps_route_to_the_carousel_under_the_pointer() {
    let mut screen = screen();
    screen.layout_subviews(phone());

    assert_eq!(screen.tap(Point::new(100.0, 150.0)), Some(("text", 0)));
    assert_eq!(screen.tap(Point::new(10.0, 150.0)), None);
    assert_eq!(screen.tap(Point::new(200.0, 350.0)), Some(("images", 1)));
    assert_eq!(screen.tap(Point::new(200.0, 600.0)), None);

    assert_eq!(screen.text.events().selected, vec![0]);
    assert_eq!(screen.images.events().selected, vec![1]);
}

#[test]
fn scripted_session_pages_flicks_and_selects() {
    let mut screen = screen();
    let report = session::run(&mut screen, phone(), None);

    assert_eq!(report.steps.len(), 7);
    let last = report.last().unwrap();
    let text = &last.summary.carousels[0];
    let images = &last.summary.carousels[1];

    // Free-scrolling text: the flick stays at 220, the arrow snaps to item 2.
    assert_eq!(text.content_offset, 302.0);
    // Paged images: arrow to 250, flick to 500, tap item 5, flick back to 250.
    assert_eq!(images.content_offset, 250.0);
    assert_eq!(images.selected, vec![5]);
    assert!(images.arrows.left && images.arrows.right);
}

#[test]
fn resizing_mid_session_keeps_the_anchor_image() {
    let mut screen = screen();
    let report = session::run(&mut screen, phone(), Some(540.0));

    assert_eq!(report.steps.len(), 8);
    let resized = &report.steps[6];
    assert!(resized.action.starts_with("resize to 540"));

    let images = &resized.summary.carousels[1];
    assert_eq!(images.item_size, Size::new(200.0, 189.0));
    assert_eq!(images.content_offset, 800.0);
    assert_eq!(images.item_offset, 4.0);

    let text = &resized.summary.carousels[0];
    assert_eq!(text.content_offset, 302.0);
}

#[test]
fn config_overrides_the_presets() {
    let config = ScrollbarConfig::parse_json(
        r#"{"carousels": {"images": {
            "sizing": {"dynamic": {"items_per_page": 3}},
            "snapping_step_size": 3,
            "shows_separators": false
        }}}"#,
    )
    .unwrap();
    let mut screen = DemoScreen::new(&config, 7);
    screen.layout_subviews(phone());

    assert_eq!(
        screen.images.settings().sizing,
        SizingPolicy::dynamic(3)
    );
    // 130pt items on the full screen.
    assert!((screen.images.frame().height() - 91.0).abs() < 1e-9);
    // The text carousel keeps its preset.
    assert_eq!(screen.text.settings().snapping_step_size, 0);
}

#[test]
fn summary_serializes_to_json() {
    let mut screen = DemoScreen::new(&ScrollbarConfig::default(), 1);
    screen.layout_subviews(phone());
    let summary = screen.summary();

    // A single item fits the viewport: no scrolling, both arrows off.
    assert!(summary.carousels[0].normalized_offset.is_nan());
    let json = serde_json::to_value(&summary).unwrap();
    assert!(json["carousels"][0]["normalized_offset"].is_null());
    assert_eq!(json["carousels"][1]["name"], "images");
}
