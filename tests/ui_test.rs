use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use devref::forms::{CommandForm, EntityForm, FormField, ToolForm};
use devref::ui::{FormApp, FormOutcome};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut FormApp, text: &str) {
    for c in text.chars() {
        assert_eq!(app.handle_key(key(KeyCode::Char(c))), None);
    }
}

fn field<'a>(fields: &'a [FormField], key: &str) -> &'a FormField {
    fields.iter().find(|f| f.key == key).unwrap()
}

#[test]
fn test_form_app_new() {
    let app = FormApp::new("New command", CommandForm::new().fields(), true);
    assert_eq!(app.selected, 0);
    assert_eq!(app.cursor, 0);
    assert_eq!(app.message, None);
    assert_eq!(app.value("title"), Some(""));
}

#[test]
fn test_typing_and_editing() {
    let mut app = FormApp::new("New command", CommandForm::new().fields(), true);
    type_text(&mut app, "lx");
    app.handle_key(key(KeyCode::Backspace));
    type_text(&mut app, "s");
    assert_eq!(app.value("title"), Some("ls"));

    app.handle_key(key(KeyCode::Home));
    type_text(&mut app, "é");
    assert_eq!(app.value("title"), Some("éls"));
    app.handle_key(key(KeyCode::Delete));
    assert_eq!(app.value("title"), Some("és"));
}

#[test]
fn test_title_blur_fills_empty_slug() {
    let mut app = FormApp::new("New command", CommandForm::new().fields(), true);
    type_text(&mut app, "What is Linux?");
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.selected, 1);
    assert_eq!(app.value("slug"), Some("what-is-linux"));

    // Editing the title again leaves a filled slug alone
    app.handle_key(key(KeyCode::Up));
    type_text(&mut app, " Really");
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.value("slug"), Some("what-is-linux"));

    app.handle_key(ctrl('r'));
    assert_eq!(app.value("slug"), Some("what-is-linux-really"));
}

#[test]
fn test_enter_on_line_moves_to_next_field() {
    let mut app = FormApp::new("New command", CommandForm::new().fields(), true);
    type_text(&mut app, "Grep");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.selected, 1);
    assert_eq!(app.value("title"), Some("Grep"));
    assert_eq!(app.value("slug"), Some("grep"));
}

#[test]
fn test_enter_in_text_field_inserts_newline() {
    let fields = vec![FormField::text("notes", "Notes", "")];
    let mut app = FormApp::new("Notes", fields, false);
    type_text(&mut app, "a");
    app.handle_key(key(KeyCode::Enter));
    type_text(&mut app, "b");
    assert_eq!(app.value("notes"), Some("a\nb"));
}

#[test]
fn test_toggle_choice_and_number_fields() {
    let fields = vec![
        FormField::toggle("published", "Published", false),
        FormField::choice("platform", "Platform", "linux", &["linux", "macos", "windows"]),
        FormField::number("popularity", "Popularity", Some(5)),
    ];
    let mut app = FormApp::new("Tool", fields, false);

    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(app.value("published"), Some("true"));
    type_text(&mut app, "x");
    assert_eq!(app.value("published"), Some("true"));

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.value("platform"), Some("macos"));
    app.handle_key(key(KeyCode::Left));
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.value("platform"), Some("windows"));

    app.handle_key(key(KeyCode::Down));
    type_text(&mut app, "a");
    app.handle_key(key(KeyCode::Backspace));
    type_text(&mut app, "7");
    assert_eq!(app.value("popularity"), Some("7"));
}

#[test]
fn test_navigation_stays_in_bounds() {
    let fields = vec![FormField::line("title", "Title", ""), FormField::line("slug", "Slug", "")];
    let mut app = FormApp::new("Bounds", fields, false);
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.selected, 0);
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.selected, 1);
}

#[test]
fn test_save_returns_edited_fields() {
    let mut form = ToolForm::new();
    let mut app = FormApp::new("New tool", form.fields(), true);
    type_text(&mut app, "Hash Generator");

    let fields = match app.handle_key(ctrl('s')) {
        Some(FormOutcome::Save(fields)) => fields,
        other => panic!("Expected save, got {:?}", other),
    };
    assert_eq!(field(&fields, "slug").value, "hash-generator");

    form.apply_fields(&fields).unwrap();
    assert_eq!(form.record.title, "Hash Generator");
    assert_eq!(form.record.slug, "hash-generator");
}

#[test]
fn test_generate_seo_and_cancel() {
    let mut app = FormApp::new("New command", CommandForm::new().fields(), true);
    assert!(matches!(app.handle_key(ctrl('g')), Some(FormOutcome::GenerateSeo(_))));
    assert_eq!(app.handle_key(key(KeyCode::Esc)), Some(FormOutcome::Cancel));
    assert_eq!(app.handle_key(ctrl('c')), Some(FormOutcome::Cancel));

    let mut lesson_app = FormApp::new("New lesson", vec![FormField::line("title", "Title", "")], false);
    assert_eq!(lesson_app.handle_key(ctrl('g')), None);
    assert!(lesson_app.message.is_some());
}

#[test]
fn test_signed_field_accepts_leading_minus() {
    let mut app = FormApp::new("Lesson", vec![FormField::signed("order_index", "Order", 0)], false);
    app.handle_key(key(KeyCode::Backspace));
    type_text(&mut app, "-3");
    assert_eq!(field(&app.fields, "order_index").value, "-3");

    type_text(&mut app, "-x7");
    assert_eq!(field(&app.fields, "order_index").value, "-37");
}

#[test]
fn test_number_field_rejects_minus() {
    let mut app = FormApp::new("Tool", vec![FormField::number("popularity", "Popularity", None::<u32>)], false);
    type_text(&mut app, "-4");
    assert_eq!(field(&app.fields, "popularity").value, "4");
}
