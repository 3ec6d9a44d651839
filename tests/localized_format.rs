//! Tests the localized formats similar to how an application would put its
//! user-facing messages through translation tables.

use weft::iso::{int, string};
use weft::localized::{
    build, lit, slot, slot_at, Localize, LocalizedTemplate, MapBundle,
};


fn steps() -> weft::localized::Format<(i64, i64)> {
    build()
        .skip(lit("Step "))
        .append(slot_at(0, int()))
        .skip(lit(" of "))
        .append(slot_at(1, int()))
        .finish()
}


#[test]
fn parse_and_render_stay_concrete() {
    let f = steps();
    assert_eq!(f.parse(LocalizedTemplate::from_texts(["Step ", "2", " of ",
                                                      "9"])),
               Ok(Some((2, 9))));
    assert_eq!(f.render(&(2, 9)), Ok(Some("Step 2 of 9".to_string())));
    assert_eq!(f.template_for(&(2, 9)),
               Ok(Some("Step {int} of {int}".to_string())));
}

#[test]
fn indexed_slots_let_translations_reorder() {
    let f = steps();
    let bundle = MapBundle::new([("Step {0} of {1}", "de {1} pasos, el {0}")]);
    assert_eq!(f.localize(&(2, 9), &bundle, None),
               Ok(Some("de 9 pasos, el 2".to_string())));
}

#[test]
fn missing_translations_fall_back_to_the_concrete_text() {
    let f = steps();
    assert_eq!(f.localize(&(2, 9), &MapBundle::default(), None),
               Ok(Some("Step 2 of 9".to_string())));
}

#[test]
fn tables_pick_the_audience() {
    let greeting = build()
        .skip(lit("Hello, "))
        .append(slot(string()))
        .skip(lit("!"))
        .finish();
    let bundle = MapBundle::new([("Hello, {}!", "¡Hola, {}!")])
        .with_table("formal", [("Hello, {}!", "Encantada de conocerle, {}.")]);
    let name = "Ana".to_string();

    assert_eq!(greeting.localize(&name, &bundle, None),
               Ok(Some("¡Hola, Ana!".to_string())));
    assert_eq!(greeting.localize(&name, &bundle, Some("formal")),
               Ok(Some("Encantada de conocerle, Ana.".to_string())));
    assert_eq!(greeting.localize(&name, &bundle, Some("missing")),
               Ok(Some("Hello, Ana!".to_string())));
}
