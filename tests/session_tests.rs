use contacts::cli::render;
use contacts::cli::session::*;
use contacts::directory::ContactDirectory;
use contacts::model::*;

fn setup() -> ContactDirectory {
    ContactDirectory::open(rusqlite::Connection::open_in_memory().unwrap()).unwrap()
}

fn fill(session: &mut Session, name: &str, phone: &str, email: &str) {
    session.form = ContactForm {
        name: name.into(),
        phone: phone.into(),
        email: email.into(),
    };
}

// ==========================================================================
// FORM
// ==========================================================================

#[test]
fn submit_success_clears_form() {
    let mut directory = setup();
    let mut session = Session::new(&mut directory);
    fill(&mut session, "Ana Ruiz", "555-1234", "ana@x.com");

    let n = session.submit_form();
    assert_eq!(n.kind, NotificationKind::Success);
    assert_eq!(n.message, "Added Ana Ruiz");
    assert_eq!(session.form, ContactForm::default());
    assert_eq!(session.directory().contacts().len(), 1);
}

#[test]
fn submit_with_blank_field_keeps_form() {
    let mut directory = setup();
    let mut session = Session::new(&mut directory);
    fill(&mut session, "Ana Ruiz", " ", "");

    let n = session.submit_form();
    assert_eq!(n.kind, NotificationKind::Warning);
    assert_eq!(n.message, "Required: phone, email");
    assert_eq!(session.form.name, "Ana Ruiz");
    assert!(session.directory().contacts().is_empty());
}

#[test]
fn submit_storage_failure_reports_error_and_keeps_form() {
    let mut directory = setup();
    directory.conn().execute_batch("DROP TABLE contacts").unwrap();
    let mut session = Session::new(&mut directory);
    fill(&mut session, "Ana", "1", "a@x.com");

    let n = session.submit_form();
    assert_eq!(n.kind, NotificationKind::Error);
    assert!(n.message.starts_with("Could not save contact"));
    assert_eq!(session.form.name, "Ana");
}

#[test]
fn submit_reports_success_when_only_the_reload_fails() {
    let mut directory = setup();
    directory
        .conn()
        .execute_batch("INSERT INTO contacts (name, phone, email) VALUES ('Zed', X'00', 'z@x.com')")
        .unwrap();
    let mut session = Session::new(&mut directory);
    fill(&mut session, "Ana", "1", "a@x.com");

    let n = session.submit_form();
    assert_eq!(n.kind, NotificationKind::Success);
    assert_eq!(session.form, ContactForm::default());
    assert!(session.list_view().contains("Ana"));
}

#[test]
fn cancel_form_clears_values() {
    let mut directory = setup();
    let mut session = Session::new(&mut directory);
    fill(&mut session, "Ana", "", "");
    session.cancel_form();
    assert_eq!(session.form, ContactForm::default());
}

// ==========================================================================
// LIST / SEARCH
// ==========================================================================

#[test]
fn empty_directory_renders_empty_state() {
    let mut directory = setup();
    let session = Session::new(&mut directory);
    assert_eq!(session.list_view(), render::EMPTY_STATE);
}

#[test]
fn search_input_filters_and_is_kept_across_changes() {
    let mut directory = setup();
    directory.add("Ana Ruiz", "555-1234", "ana@x.com").unwrap();
    let mut session = Session::new(&mut directory);

    let view = session.search_input("beto");
    assert_eq!(view, "No contacts match 'beto'.");

    fill(&mut session, "Beto Diaz", "555-9999", "beto@x.com");
    session.submit_form();

    let view = session.list_view();
    assert!(view.contains("Beto Diaz"));
    assert!(!view.contains("Ana Ruiz"));
    assert_eq!(session.filter(), "beto");
}

// ==========================================================================
// DETAIL / DELETE PROTOCOL
// ==========================================================================

#[test]
fn activate_row_renders_detail() {
    let mut directory = setup();
    let ana = directory.add("Ana Ruiz", "555-1234", "ana@x.com").unwrap();
    let mut session = Session::new(&mut directory);

    let view = session.activate_row(ana.id).unwrap();
    assert!(view.contains("Ana Ruiz"));
    assert!(view.contains("555-1234"));
}

#[test]
fn activate_missing_row_is_noop() {
    let mut directory = setup();
    let mut session = Session::new(&mut directory);
    assert!(session.activate_row(Id::new(5)).is_none());
    assert!(session.request_delete().is_none());
}

#[test]
fn request_then_confirm_deletes() {
    let mut directory = setup();
    let ana = directory.add("Ana Ruiz", "555-1234", "ana@x.com").unwrap();
    let mut session = Session::new(&mut directory);
    session.activate_row(ana.id).unwrap();

    let request = session.request_delete().unwrap();
    assert_eq!(request.id, ana.id);
    assert_eq!(request.name, "Ana Ruiz");
    assert_eq!(session.directory().contacts().len(), 1);

    let n = session.confirm_delete(true).unwrap();
    assert_eq!(n.kind, NotificationKind::Success);
    assert_eq!(n.message, "Deleted Ana Ruiz");
    assert!(session.directory().contacts().is_empty());
    assert!(session.directory().selected_id().is_none());
    assert!(session.pending_delete().is_none());
}

#[test]
fn declined_confirmation_keeps_contact() {
    let mut directory = setup();
    let ana = directory.add("Ana", "1", "a@x.com").unwrap();
    let mut session = Session::new(&mut directory);
    session.activate_row(ana.id).unwrap();
    session.request_delete().unwrap();

    assert!(session.confirm_delete(false).is_none());
    assert_eq!(session.directory().contacts().len(), 1);
    assert_eq!(session.directory().selected_id(), Some(ana.id));
}

#[test]
fn confirm_without_request_does_nothing() {
    let mut directory = setup();
    let ana = directory.add("Ana", "1", "a@x.com").unwrap();
    let mut session = Session::new(&mut directory);
    session.activate_row(ana.id).unwrap();

    assert!(session.confirm_delete(true).is_none());
    assert_eq!(session.directory().contacts().len(), 1);
}

#[test]
fn close_detail_cancels_pending_request() {
    let mut directory = setup();
    let ana = directory.add("Ana", "1", "a@x.com").unwrap();
    let mut session = Session::new(&mut directory);
    session.activate_row(ana.id).unwrap();
    session.request_delete().unwrap();

    session.close_detail();
    assert!(session.pending_delete().is_none());
    assert!(session.directory().selected_id().is_none());
    assert!(session.confirm_delete(true).is_none());
    assert_eq!(session.directory().contacts().len(), 1);
}

#[test]
fn failed_delete_reports_error() {
    let mut directory = setup();
    let ana = directory.add("Ana", "1", "a@x.com").unwrap();
    let mut session = Session::new(&mut directory);
    session.activate_row(ana.id).unwrap();
    session.request_delete().unwrap();
    session.directory().conn().execute_batch("DROP TABLE contacts").unwrap();

    let n = session.confirm_delete(true).unwrap();
    assert_eq!(n.kind, NotificationKind::Error);
    assert!(n.message.starts_with("Could not delete contact"));
    assert_eq!(session.directory().contacts().len(), 1);
}

#[test]
fn delete_reports_success_when_only_the_reload_fails() {
    let mut directory = setup();
    let ana = directory.add("Ana", "1", "a@x.com").unwrap();
    let mut session = Session::new(&mut directory);
    session.activate_row(ana.id).unwrap();
    session.request_delete().unwrap();
    session
        .directory()
        .conn()
        .execute_batch("INSERT INTO contacts (name, phone, email) VALUES ('Zed', X'00', 'z@x.com')")
        .unwrap();

    let n = session.confirm_delete(true).unwrap();
    assert_eq!(n.kind, NotificationKind::Success);
    assert_eq!(session.list_view(), render::EMPTY_STATE);
}
