use approx::assert_abs_diff_eq;
use legend_rs::api::build_entry_group;
use legend_rs::core::{Bounds, ResolvedAlign};
use legend_rs::render::{
    Color, DefaultSymbolFactory, EntryElement, SymbolKind, TextHAlign, TextStyle,
};

const ITEM_WIDTH: f64 = 25.0;
const ITEM_HEIGHT: f64 = 14.0;

fn build(
    legend_symbol: SymbolKind,
    data_symbol: Option<SymbolKind>,
    align: ResolvedAlign,
    interactive: bool,
) -> legend_rs::render::EntryGroup {
    build_entry_group(
        "revenue",
        &TextStyle::default(),
        &legend_symbol,
        data_symbol.as_ref(),
        ITEM_WIDTH,
        ITEM_HEIGHT,
        align,
        Some(Color::rgb(0.2, 0.5, 0.9)),
        interactive,
        &DefaultSymbolFactory,
    )
}

fn symbol_count(group: &legend_rs::render::EntryGroup) -> usize {
    group
        .children()
        .iter()
        .filter(|child| matches!(child.element, EntryElement::Symbol(_)))
        .count()
}

#[test]
fn distinct_data_symbol_composes_a_centered_secondary_glyph() {
    let group = build(
        SymbolKind::RoundRect,
        Some(SymbolKind::Circle),
        ResolvedAlign::Left,
        true,
    );
    assert_eq!(symbol_count(&group), 2);

    let EntryElement::Symbol(secondary) = &group.children()[1].element else {
        panic!("second child should be the composed glyph");
    };
    let size = ITEM_HEIGHT * 0.8;
    assert_eq!(secondary.kind, SymbolKind::Circle);
    assert_abs_diff_eq!(secondary.width, size);
    assert_abs_diff_eq!(secondary.height, size);
    assert_abs_diff_eq!(secondary.x, (ITEM_WIDTH - size) / 2.0);
    assert_abs_diff_eq!(secondary.y, (ITEM_HEIGHT - size) / 2.0);
}

#[test]
fn none_data_symbol_composes_nothing() {
    let group = build(
        SymbolKind::RoundRect,
        Some(SymbolKind::None),
        ResolvedAlign::Left,
        true,
    );
    assert_eq!(symbol_count(&group), 1);
}

#[test]
fn matching_data_symbol_composes_nothing() {
    let group = build(
        SymbolKind::Rect,
        Some(SymbolKind::Rect),
        ResolvedAlign::Left,
        true,
    );
    assert_eq!(symbol_count(&group), 1);
}

#[test]
fn left_alignment_anchors_label_right_of_the_swatch() {
    let group = build(SymbolKind::RoundRect, None, ResolvedAlign::Left, true);
    let EntryElement::Label(label) = &group.children()[1].element else {
        panic!("second child should be the label");
    };
    assert_abs_diff_eq!(label.x, ITEM_WIDTH + 5.0);
    assert_abs_diff_eq!(label.y, ITEM_HEIGHT / 2.0);
    assert_eq!(label.h_align, TextHAlign::Left);
}

#[test]
fn right_alignment_anchors_label_left_of_the_swatch() {
    let group = build(SymbolKind::RoundRect, None, ResolvedAlign::Right, true);
    let EntryElement::Label(label) = &group.children()[1].element else {
        panic!("second child should be the label");
    };
    assert_abs_diff_eq!(label.x, -5.0);
    assert_eq!(label.h_align, TextHAlign::Right);
}

#[test]
fn hit_rect_encloses_symbols_and_label_exactly() {
    let group = build(
        SymbolKind::RoundRect,
        Some(SymbolKind::Line),
        ResolvedAlign::Left,
        true,
    );
    let children = group.children();
    let EntryElement::HitRect(hit) = &children[children.len() - 1].element else {
        panic!("last child should be the hit rect");
    };

    let union = children[..children.len() - 1]
        .iter()
        .fold(Bounds::zero(), |acc, child| acc.union(child.element.bounds()));
    assert_eq!(hit.bounds(), union);
    assert!(hit.invisible);
    assert!(hit.fill.is_none());
}

#[test]
fn non_interactive_entries_silence_every_child() {
    let group = build(SymbolKind::RoundRect, None, ResolvedAlign::Left, false);
    assert!(group.children().iter().all(|child| child.silent));
}

#[test]
fn interactive_entries_keep_children_live() {
    let group = build(SymbolKind::RoundRect, None, ResolvedAlign::Left, true);
    assert!(group.children().iter().all(|child| !child.silent));
}
