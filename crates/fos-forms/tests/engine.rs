//! Engine integration tests
//!
//! Markup goes through fos-html, user edits are simulated by setting a value
//! and dispatching the matching DOM event.

use fos_dom::forms::SelectedFile;
use fos_dom::{Document, DomEvent, NodeId};
use fos_forms::{
    ARIA_INVALID, Config, ConfigWarning, Listener, ValidationEngine, ValidationState, displayed_state,
};
use tracing_subscriber::EnvFilter;

const SIGNUP: &str = r##"
    <form id="signup" data-validate>
        <input id="name" required minlength="2" aria-describedby="name-msg"
               data-required-err="Name is required">
        <p id="name-msg" class="msg"></p>

        <input id="password" type="password" required aria-describedby="pw-msg">
        <p id="pw-msg"></p>

        <input id="confirm" type="password" data-confirm="#password"
               aria-describedby="confirm-msg" data-success="Passwords match">
        <p id="confirm-msg"></p>

        <input id="nickname">
        <input id="skip" pattern="[0-9]+" data-novalidate>
        <button id="submit" data-validate-submit>Sign up</button>
    </form>
"##;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn setup(html: &str) -> (Document, ValidationEngine) {
    init_tracing();
    let mut doc = fos_html::parse(html).unwrap();
    let mut engine = ValidationEngine::new(Config::default());
    engine.discover(&mut doc);
    (doc, engine)
}

fn node(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id).unwrap_or_else(|| panic!("no element #{id}"))
}

fn type_into(engine: &mut ValidationEngine, doc: &mut Document, id: &str, value: &str) -> usize {
    let control = node(doc, id);
    doc.set_value(control, value);
    engine.dispatch(doc, &DomEvent::input(control))
}

fn aria(doc: &Document, id: &str) -> Option<String> {
    doc.get_attribute(node(doc, id), ARIA_INVALID).map(str::to_string)
}

fn message(doc: &Document, id: &str) -> String {
    doc.text_content(node(doc, id))
}

fn submit_enabled(doc: &Document) -> bool {
    !doc.has_attribute(node(doc, "submit"), "disabled")
}

// ============================================================================
// REGISTRATION
// ============================================================================

#[test]
fn test_registration_wires_eligible_controls() {
    init_tracing();
    let mut doc = fos_html::parse(SIGNUP).unwrap();
    let mut engine = ValidationEngine::new(Config::default());
    let reports = engine.discover(&mut doc);

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    let ids: Vec<NodeId> = ["name", "password", "confirm"].iter().map(|id| node(&doc, id)).collect();
    assert_eq!(report.controls, ids);
    assert_eq!(report.gated_submits, vec![node(&doc, "submit")]);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);

    assert_eq!(engine.listener_count(node(&doc, "nickname")), 0);
    assert_eq!(engine.listener_count(node(&doc, "skip")), 0);
    assert_eq!(engine.listener_count(node(&doc, "name")), 1);
    // Own listener plus the confirm dependent
    assert_eq!(
        engine.listeners(node(&doc, "password")),
        &[Listener::Validate(node(&doc, "password")), Listener::Validate(node(&doc, "confirm"))],
    );

    let binding = engine.binding(node(&doc, "confirm")).unwrap();
    assert_eq!(binding.message_target, Some(node(&doc, "confirm-msg")));
    assert_eq!(binding.confirm.as_ref().and_then(|c| c.origin), Some(node(&doc, "password")));
}

#[test]
fn test_registration_leaves_controls_neutral() {
    let (doc, _engine) = setup(SIGNUP);
    for id in ["name", "password", "confirm"] {
        assert_eq!(aria(&doc, id), None, "#{id} should start neutral");
    }
    assert!(!submit_enabled(&doc), "required fields are empty");
}

#[test]
fn test_double_registration_is_idempotent() {
    let (mut doc, mut engine) = setup(SIGNUP);
    let form = node(&doc, "signup");

    let again = engine.discover(&mut doc);
    assert_eq!(again.len(), 1);
    assert!(again[0].already_registered);
    assert!(again[0].controls.is_empty());
    assert!(engine.register_form(&mut doc, form).already_registered);
    assert_eq!(engine.form_count(), 1);

    assert_eq!(engine.listener_count(node(&doc, "name")), 1);
    assert_eq!(engine.listener_count(form), 1);
    // One validate on the control, one gate on the form
    assert_eq!(type_into(&mut engine, &mut doc, "name", "Ada"), 2);
}

#[test]
fn test_unmarked_form_ignored() {
    let (mut doc, mut engine) = setup(r#"<form id="plain"><input id="q" required></form>"#);
    assert_eq!(engine.form_count(), 0);

    assert_eq!(type_into(&mut engine, &mut doc, "q", "x"), 0);
    assert_eq!(aria(&doc, "q"), None);
}

#[test]
fn test_dynamic_form_insertion() {
    let (mut doc, mut engine) = setup("<body><main id='app'></main></body>");
    assert_eq!(engine.form_count(), 0);

    let app = node(&doc, "app");
    let form = doc.create_element("form", &[("data-validate", "")]);
    let email = doc.create_element("input", &[("id", "email"), ("type", "email"), ("required", "")]);
    doc.append_child(form, email);
    doc.append_child(app, form);

    engine.dispatch(&mut doc, &DomEvent::node_inserted(form, app));
    assert!(engine.is_registered(form));
    assert_eq!(engine.listener_count(email), 1);

    // Insertion of an ancestor rediscovers the same form without rewiring it
    let body = doc.body();
    engine.dispatch(&mut doc, &DomEvent::node_inserted(app, body));
    assert_eq!(engine.listener_count(email), 1);

    type_into(&mut engine, &mut doc, "email", "nope");
    assert_eq!(aria(&doc, "email").as_deref(), Some("true"));
}

// ============================================================================
// RESOLUTION AND SYNC
// ============================================================================

#[test]
fn test_required_and_length_messages() {
    let (mut doc, mut engine) = setup(SIGNUP);
    let msg = node(&doc, "name-msg");

    type_into(&mut engine, &mut doc, "name", "A");
    assert_eq!(aria(&doc, "name").as_deref(), Some("true"));
    assert_eq!(message(&doc, "name-msg"), "The value is too short.");
    assert!(doc.has_class(msg, "invalid"));

    type_into(&mut engine, &mut doc, "name", "");
    assert_eq!(message(&doc, "name-msg"), "Name is required");

    type_into(&mut engine, &mut doc, "name", "Ada");
    assert_eq!(aria(&doc, "name").as_deref(), Some("false"));
    assert_eq!(message(&doc, "name-msg"), "");
    assert!(doc.has_class(msg, "valid"));
    assert!(!doc.has_class(msg, "invalid"));
    assert!(doc.has_class(msg, "msg"));
}

#[test]
fn test_reset_to_empty() {
    let html = r#"
        <form data-validate>
            <input id="code" pattern="[A-Z]+" aria-describedby="code-msg">
            <span id="code-msg"></span>
            <input id="city" required aria-describedby="city-msg">
            <span id="city-msg"></span>
        </form>
    "#;
    let (mut doc, mut engine) = setup(html);
    let code_msg = node(&doc, "code-msg");

    type_into(&mut engine, &mut doc, "code", "ABC");
    assert_eq!(displayed_state(&doc, node(&doc, "code")), ValidationState::Valid);
    type_into(&mut engine, &mut doc, "code", "");
    assert_eq!(aria(&doc, "code"), None);
    assert!(!doc.has_class(code_msg, "valid"));
    assert!(!doc.has_class(code_msg, "invalid"));

    type_into(&mut engine, &mut doc, "city", "Oslo");
    type_into(&mut engine, &mut doc, "city", "");
    assert_eq!(aria(&doc, "city").as_deref(), Some("true"));
    assert_eq!(message(&doc, "city-msg"), "This field is required.");
}

#[test]
fn test_range_overrides() {
    let html = r#"
        <form data-validate>
            <input id="age" type="number" min="18" max="120" aria-describedby="age-msg"
                   data-min-err="Adults only" data-type-err="Digits please">
            <p id="age-msg"></p>
        </form>
    "#;
    let (mut doc, mut engine) = setup(html);

    type_into(&mut engine, &mut doc, "age", "12");
    assert_eq!(message(&doc, "age-msg"), "Adults only");
    type_into(&mut engine, &mut doc, "age", "130");
    assert_eq!(message(&doc, "age-msg"), "The value is too large.");
    type_into(&mut engine, &mut doc, "age", "twelve");
    assert_eq!(message(&doc, "age-msg"), "Digits please");
    type_into(&mut engine, &mut doc, "age", "30");
    assert_eq!(aria(&doc, "age").as_deref(), Some("false"));
}

#[test]
fn test_file_accept_on_change() {
    let html = r#"
        <form data-validate>
            <input id="avatar" type="file" accept=".png,image/*" aria-describedby="avatar-msg"
                   data-accept-err="Images only" data-success="Nice picture">
            <p id="avatar-msg"></p>
        </form>
    "#;
    let (mut doc, mut engine) = setup(html);
    let avatar = node(&doc, "avatar");

    doc.set_files(avatar, vec![SelectedFile::new("notes.txt", "text/plain")]);
    engine.dispatch(&mut doc, &DomEvent::change(avatar));
    assert_eq!(message(&doc, "avatar-msg"), "Images only");

    doc.set_files(avatar, vec![SelectedFile::new("a.PNG", "image/x-png")]);
    engine.dispatch(&mut doc, &DomEvent::change(avatar));
    assert_eq!(message(&doc, "avatar-msg"), "Nice picture");
    assert_eq!(aria(&doc, "avatar").as_deref(), Some("false"));
}

#[test]
fn test_opt_out_never_synchronized() {
    let (mut doc, mut engine) = setup(SIGNUP);
    assert_eq!(type_into(&mut engine, &mut doc, "skip", "abc"), 1, "only the form gate runs");
    assert_eq!(aria(&doc, "skip"), None);
}

// ============================================================================
// CONFIRM PAIRS
// ============================================================================

#[test]
fn test_confirm_pair_follows_origin() {
    let (mut doc, mut engine) = setup(SIGNUP);

    type_into(&mut engine, &mut doc, "password", "secret");
    assert_eq!(aria(&doc, "confirm"), None);

    type_into(&mut engine, &mut doc, "confirm", "secret");
    assert_eq!(aria(&doc, "confirm").as_deref(), Some("false"));
    assert_eq!(message(&doc, "confirm-msg"), "Passwords match");

    type_into(&mut engine, &mut doc, "confirm", "secre");
    assert_eq!(aria(&doc, "confirm").as_deref(), Some("true"));
    assert_eq!(message(&doc, "confirm-msg"), "Values do not match.");

    type_into(&mut engine, &mut doc, "confirm", "secret");
    type_into(&mut engine, &mut doc, "password", "other");
    assert_eq!(aria(&doc, "confirm").as_deref(), Some("true"));
    assert_eq!(message(&doc, "confirm-msg"), "Values do not match.");
}

#[test]
fn test_confirm_ignores_surrounding_whitespace() {
    let (mut doc, mut engine) = setup(SIGNUP);

    type_into(&mut engine, &mut doc, "password", "secret");
    type_into(&mut engine, &mut doc, "confirm", " secret ");
    assert_eq!(aria(&doc, "confirm").as_deref(), Some("false"));
    assert_eq!(message(&doc, "confirm-msg"), "Passwords match");
}

#[test]
fn test_confirm_origin_outside_form_regates() {
    let html = r##"
        <input id="pw">
        <form id="repeat-form" data-validate>
            <input id="pw2" data-confirm="#pw">
            <button id="submit" data-validate-submit>Save</button>
        </form>
    "##;
    let (mut doc, mut engine) = setup(html);
    let (pw, form, submit) = (node(&doc, "pw"), node(&doc, "repeat-form"), node(&doc, "submit"));
    assert_eq!(
        engine.listeners(pw),
        &[Listener::Validate(node(&doc, "pw2")), Listener::Gate { form, submit }],
    );

    type_into(&mut engine, &mut doc, "pw", "secret");
    type_into(&mut engine, &mut doc, "pw2", "secret");
    assert_eq!(aria(&doc, "pw2").as_deref(), Some("false"));
    assert!(submit_enabled(&doc));

    type_into(&mut engine, &mut doc, "pw", "other");
    assert_eq!(aria(&doc, "pw2").as_deref(), Some("true"));
    assert!(!submit_enabled(&doc));

    type_into(&mut engine, &mut doc, "pw", "secret");
    assert!(submit_enabled(&doc));
}

#[test]
fn test_dependent_never_resolves_origin() {
    let (mut doc, mut engine) = setup(SIGNUP);
    let password = node(&doc, "password");

    // Origin stays untouched while only the dependent changes
    type_into(&mut engine, &mut doc, "confirm", "secret");
    assert_eq!(aria(&doc, "password"), None);
    assert_eq!(engine.listener_count(node(&doc, "confirm")), 1);
    assert!(engine.listeners(node(&doc, "confirm")).iter().all(|l| *l != Listener::Validate(password)));
}

#[test]
fn test_missing_confirm_origin_keeps_previous_state() {
    let html = r##"
        <form data-validate>
            <input id="again" data-confirm="#ghost">
        </form>
    "##;
    init_tracing();
    let mut doc = fos_html::parse(html).unwrap();
    let mut engine = ValidationEngine::default();
    let reports = engine.discover(&mut doc);
    let again = node(&doc, "again");

    assert_eq!(
        reports[0].warnings,
        vec![ConfigWarning::MissingConfirmOrigin { control: again, selector: "#ghost".into() }],
    );

    doc.set_attribute(again, ARIA_INVALID, "true");
    doc.set_value(again, "anything");
    assert_eq!(engine.validate(&mut doc, again), None);
    assert_eq!(aria(&doc, "again").as_deref(), Some("true"));
}

// ============================================================================
// SUBMIT GATING
// ============================================================================

#[test]
fn test_submit_gating_follows_controls() {
    let (mut doc, mut engine) = setup(SIGNUP);
    assert!(!submit_enabled(&doc));

    type_into(&mut engine, &mut doc, "name", "Ada");
    type_into(&mut engine, &mut doc, "password", "secret");
    assert!(submit_enabled(&doc));

    // Platform validity passes, but the confirm marker does not
    type_into(&mut engine, &mut doc, "confirm", "nope");
    assert!(!submit_enabled(&doc));

    type_into(&mut engine, &mut doc, "confirm", "secret");
    assert!(submit_enabled(&doc));

    // Edits to unmanaged controls re-gate too
    doc.set_attribute(node(&doc, "name"), ARIA_INVALID, "true");
    type_into(&mut engine, &mut doc, "nickname", "ace");
    assert!(!submit_enabled(&doc));
}

#[test]
fn test_wrong_submit_kind_rejected() {
    let html = r#"
        <form data-validate>
            <input id="title" required>
            <button id="preview" type="button" data-validate-submit>Preview</button>
            <input id="send" type="submit" data-validate-submit>
        </form>
    "#;
    init_tracing();
    let mut doc = fos_html::parse(html).unwrap();
    let mut engine = ValidationEngine::default();
    let report = engine.discover(&mut doc).remove(0);
    let preview = node(&doc, "preview");
    let send = node(&doc, "send");

    assert_eq!(report.gated_submits, vec![send]);
    assert_eq!(
        report.warnings,
        vec![ConfigWarning::InvalidSubmitControl { control: preview, tag: "button".into() }],
    );
    assert!(!doc.has_attribute(preview, "disabled"));
    assert!(doc.has_attribute(send, "disabled"));
}

// ============================================================================
// CONFIGURATION WARNINGS AND CUSTOM CONFIG
// ============================================================================

#[test]
fn test_message_target_warnings() {
    let html = r#"
        <form data-validate>
            <input id="a" required aria-describedby="nope">
            <input id="b" required aria-describedby="  ">
            <input id="c" required>
        </form>
    "#;
    init_tracing();
    let mut doc = fos_html::parse(html).unwrap();
    let mut engine = ValidationEngine::default();
    let report = engine.discover(&mut doc).remove(0);
    let (a, b) = (node(&doc, "a"), node(&doc, "b"));

    assert_eq!(report.controls.len(), 3);
    assert_eq!(report.warnings, vec![
        ConfigWarning::MissingMessageTarget { control: a, reference: "nope".into() },
        ConfigWarning::EmptyReference { control: b, attribute: "aria-describedby".into() },
    ]);

    // Still validated, just without a message element
    type_into(&mut engine, &mut doc, "a", "");
    assert_eq!(aria(&doc, "a").as_deref(), Some("true"));
}

#[test]
fn test_custom_config_names() {
    let html = r##"
        <form data-check>
            <input id="zip" pattern="[0-9]{4}" data-hint="zip-msg">
            <small id="zip-msg"></small>
            <input id="zip2" data-same-as="#zip">
            <button id="go" data-gate>Go</button>
        </form>
    "##;
    init_tracing();
    let mut doc = fos_html::parse(html).unwrap();
    let config = Config {
        form_marker: "data-check".into(),
        confirm_ref: "data-same-as".into(),
        message_ref: "data-hint".into(),
        submit_marker: "data-gate".into(),
        valid_class: "is-valid".into(),
        invalid_class: "is-invalid".into(),
        ..Config::default()
    };
    let mut engine = ValidationEngine::new(config);
    let report = engine.discover(&mut doc).remove(0);
    assert_eq!(report.controls.len(), 2);
    assert_eq!(report.gated_submits, vec![node(&doc, "go")]);

    type_into(&mut engine, &mut doc, "zip", "12a4");
    assert!(doc.has_class(node(&doc, "zip-msg"), "is-invalid"));
    assert!(doc.has_attribute(node(&doc, "go"), "disabled"));

    type_into(&mut engine, &mut doc, "zip", "1234");
    type_into(&mut engine, &mut doc, "zip2", "1234");
    assert!(doc.has_class(node(&doc, "zip-msg"), "is-valid"));
    assert_eq!(aria(&doc, "zip2").as_deref(), Some("false"));
    assert!(!doc.has_attribute(node(&doc, "go"), "disabled"));
}
