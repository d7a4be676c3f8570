use feedback_fab::ui::LayoutManager;
use ratatui::layout::Rect;

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 29,
};

#[test]
fn test_toggle_anchored_bottom_right() {
    let toggle = LayoutManager::toggle_area(SCREEN);
    assert_eq!(toggle, Rect::new(72, 25, 7, 3));
    assert_eq!(toggle.right(), SCREEN.right() - 1);
    assert_eq!(toggle.bottom(), SCREEN.bottom() - 1);
}

#[test]
fn test_picker_stacks_above_toggle_without_form() {
    let toggle = LayoutManager::toggle_area(SCREEN);
    let areas = LayoutManager::picker_areas(SCREEN, false, 4);

    assert_eq!(areas.len(), 4);
    for pair in areas.windows(2) {
        assert_eq!(pair[0].x, pair[1].x);
        assert!(pair[0].y < pair[1].y);
    }
    assert!(areas.iter().all(|area| area.x == toggle.x && area.bottom() < toggle.y));
}

#[test]
fn test_picker_lines_up_beside_toggle_with_form() {
    let toggle = LayoutManager::toggle_area(SCREEN);
    let areas = LayoutManager::picker_areas(SCREEN, true, 4);

    assert_eq!(areas.len(), 4);
    for pair in areas.windows(2) {
        assert_eq!(pair[0].y, pair[1].y);
        assert!(pair[0].right() < pair[1].x);
    }
    assert!(areas.iter().all(|area| area.y == toggle.y && area.right() < toggle.x));
}

#[test]
fn test_panel_sits_above_toggle() {
    let toggle = LayoutManager::toggle_area(SCREEN);
    let panel = LayoutManager::panel_area(SCREEN, 10);

    assert_eq!(panel.height, 10);
    assert_eq!(panel.right(), toggle.right());
    assert!(panel.bottom() < toggle.y);
    assert_eq!(LayoutManager::ack_area(SCREEN, 2).height, 4);
}

#[test]
fn test_surfaces_clipped_to_small_area() {
    let tiny = Rect::new(0, 0, 5, 2);
    let toggle = LayoutManager::toggle_area(tiny);
    assert_eq!(toggle.intersection(tiny), toggle);

    for area in LayoutManager::picker_areas(tiny, false, 4)
        .into_iter()
        .chain(LayoutManager::picker_areas(tiny, true, 4))
    {
        assert_eq!(area.intersection(tiny), area);
    }

    let panel = LayoutManager::panel_area(tiny, 30);
    assert!(panel.height <= tiny.height);
    assert!(panel.width <= tiny.width);
}

#[test]
fn test_contains() {
    let rect = Rect::new(10, 5, 4, 2);
    assert!(LayoutManager::contains(rect, 10, 5));
    assert!(LayoutManager::contains(rect, 13, 6));
    assert!(!LayoutManager::contains(rect, 14, 6));
    assert!(!LayoutManager::contains(rect, 10, 7));
}
