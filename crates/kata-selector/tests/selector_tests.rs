//! Integration tests for building and rendering compound selectors.

use kata_selector::{
    PartKind, Selector, SelectorError, SelectorPart, Specificity, attr, class, element, id,
    pseudo_class, pseudo_element,
};

#[test]
fn test_each_entry_point_formats_its_kind() {
    assert_eq!(element("div").stringify(), "div");
    assert_eq!(id("main").stringify(), "#main");
    assert_eq!(class("container").stringify(), ".container");
    assert_eq!(attr("href").stringify(), "[href]");
    assert_eq!(pseudo_class("focus").stringify(), ":focus");
    assert_eq!(pseudo_element("before").stringify(), "::before");
}

#[test]
fn test_id_with_classes() {
    let selector = id("main")
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let selector = element("a")
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_every_kind_in_order() {
    let selector = element("input")
        .id("name")
        .unwrap()
        .class("wide")
        .unwrap()
        .attr("type=text")
        .unwrap()
        .attr("required")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("not(:disabled)")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    assert_eq!(
        selector.stringify(),
        "input#name.wide[type=text][required]:hover:not(:disabled)::placeholder"
    );
}

#[test]
fn test_repeatable_kinds_keep_call_order() {
    let selector = class("b").class("a").unwrap().class("c").unwrap();
    assert_eq!(selector.stringify(), ".b.a.c");
}

#[test]
fn test_stringify_is_idempotent() {
    let selector = element("li").pseudo_class("first-child").unwrap();
    let first = selector.stringify();
    let second = selector.stringify();
    assert_eq!(first, second);
    assert_eq!(selector.to_string(), first);
}

#[test]
fn test_empty_selector_renders_empty() {
    let selector = Selector::new();
    assert!(selector.is_empty());
    assert_eq!(selector.stringify(), "");
    assert_eq!(selector.last_kind(), None);
}

// Uniqueness

#[test]
fn test_second_element_rejected() {
    let err = element("div").element("span").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Uniqueness {
            kind: PartKind::Element
        }
    );
}

#[test]
fn test_second_id_rejected() {
    let err = id("a").id("b").unwrap_err();
    assert_eq!(err, SelectorError::Uniqueness { kind: PartKind::Id });
}

#[test]
fn test_second_pseudo_element_rejected() {
    let err = pseudo_element("before")
        .pseudo_element("after")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::Uniqueness {
            kind: PartKind::PseudoElement
        }
    );
}

#[test]
fn test_uniqueness_reported_before_order() {
    // A second id after a class breaks both rules; the duplicate wins.
    let err = id("a").class("b").unwrap().id("c").unwrap_err();
    assert_eq!(err, SelectorError::Uniqueness { kind: PartKind::Id });
}

#[test]
fn test_rejected_append_leaves_selector_unchanged() {
    let mut selector = element("div").id("main").unwrap();
    let before = selector.stringify();

    let err = selector.push(SelectorPart::new(PartKind::Id, "other"));
    assert_eq!(err, Err(SelectorError::Uniqueness { kind: PartKind::Id }));
    assert_eq!(selector.stringify(), before);

    let err = selector.push(SelectorPart::new(PartKind::Element, "span"));
    assert!(err.is_err());
    assert_eq!(selector.stringify(), "div#main");
}

// Ordering

#[test]
fn test_class_after_attribute_rejected() {
    let err = attr("href").class("link").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            kind: PartKind::Class,
            after: PartKind::Attribute
        }
    );
}

#[test]
fn test_element_after_id_rejected() {
    let err = id("main").element("div").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            kind: PartKind::Element,
            after: PartKind::Id
        }
    );
}

#[test]
fn test_pseudo_class_after_pseudo_element_rejected() {
    let err = pseudo_element("after")
        .pseudo_class("hover")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            kind: PartKind::PseudoClass,
            after: PartKind::PseudoElement
        }
    );
}

#[test]
fn test_order_violation_reports_latest_kind() {
    let mut selector = class("a").pseudo_class("hover").unwrap();
    let err = selector.push(SelectorPart::new(PartKind::Id, "x"));
    assert_eq!(
        err,
        Err(SelectorError::Order {
            kind: PartKind::Id,
            after: PartKind::PseudoClass
        })
    );
    assert_eq!(selector.stringify(), ".a:hover");
}

#[test]
fn test_clone_before_chaining_keeps_valid_state() {
    let base = element("div").class("box").unwrap();
    assert!(base.clone().id("late").is_err());
    assert_eq!(base.stringify(), "div.box");
    assert_eq!(base.pseudo_class("hover").unwrap().stringify(), "div.box:hover");
}

#[test]
fn test_push_builds_from_empty() {
    let mut selector = Selector::new();
    selector
        .push(SelectorPart::new(PartKind::Element, "p"))
        .unwrap();
    selector
        .push(SelectorPart::new(PartKind::PseudoElement, "first-line"))
        .unwrap();
    assert_eq!(selector.stringify(), "p::first-line");
    assert_eq!(selector.last_kind(), Some(PartKind::PseudoElement));
}

#[test]
fn test_error_messages() {
    let uniqueness = SelectorError::Uniqueness { kind: PartKind::Id }.to_string();
    assert!(uniqueness.starts_with(
        "Element, id and pseudo-element should not occur more than one time inside the selector"
    ));

    let order = SelectorError::Order {
        kind: PartKind::Class,
        after: PartKind::Attribute,
    }
    .to_string();
    assert!(order.starts_with(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    ));
    assert!(order.ends_with("(class after attribute)"));
}

// Specificity

#[test]
fn test_specificity_counts() {
    let selector = element("a")
        .id("x")
        .unwrap()
        .class("y")
        .unwrap()
        .attr("href")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_element("before")
        .unwrap();
    assert_eq!(selector.specificity(), Specificity(1, 3, 2));
}

#[test]
fn test_specificity_constructor_and_display() {
    let specificity = Specificity::new(1, 2, 3);
    assert_eq!(specificity, Specificity(1, 2, 3));
    assert_eq!(specificity.to_string(), "(1, 2, 3)");
    assert_eq!(
        Specificity::new(1, 0, 0) + Specificity::new(0, 1, 1),
        Specificity::new(1, 1, 1)
    );
}

#[test]
fn test_specificity_ordering() {
    assert!(id("a").specificity() > class("a").class("b").unwrap().specificity());
    assert!(class("a").specificity() > element("div").specificity());
}

#[test]
fn test_part_kind_names() {
    assert_eq!(PartKind::PseudoClass.to_string(), "pseudo-class");
    assert_eq!(PartKind::Attribute.to_string(), "attribute");
    assert_eq!("attr".parse::<PartKind>(), Ok(PartKind::Attribute));
    assert_eq!("attribute".parse::<PartKind>(), Ok(PartKind::Attribute));
    assert_eq!("pseudo-element".parse::<PartKind>(), Ok(PartKind::PseudoElement));
    assert!("tag".parse::<PartKind>().is_err());
}

#[test]
fn test_parts_iterates_in_kind_order() {
    let selector = element("a").class("b").unwrap().class("c").unwrap();
    let parts: Vec<_> = selector.parts().collect();
    assert_eq!(
        parts,
        vec![
            (PartKind::Element, "a"),
            (PartKind::Class, ".b"),
            (PartKind::Class, ".c"),
        ]
    );
    assert_eq!(selector.count(PartKind::Class), 2);
}
