use securevault::files::DocumentLibrary;
use securevault::notes::NoteBook;
use securevault::store::LocalStore;
use tempfile::TempDir;

fn temp_store() -> (TempDir, LocalStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::from_path(dir.path().join("local_store.json")).unwrap();
    (dir, store)
}

#[test]
fn notes_seed_on_first_use_and_persist() {
    let (_dir, mut store) = temp_store();
    let book = NoteBook::load(&mut store).unwrap();
    assert_eq!(book.all().len(), 3);
    assert_eq!(book.all()[0].title, "Important Reminders");
    assert!(store.contains("notes"));
}

#[test]
fn note_search_covers_title_and_content_case_insensitively() {
    let (_dir, mut store) = temp_store();
    let book = NoteBook::load(&mut store).unwrap();

    assert_eq!(book.search("RECOVERY").len(), 1);
    assert_eq!(book.search("first pet").len(), 1);
    assert!(book.search("no such note").is_empty());
}

#[test]
fn new_notes_require_title_and_content_and_go_first() {
    let (_dir, mut store) = temp_store();
    let mut book = NoteBook::load(&mut store).unwrap();

    let err = book.add(&mut store, "  ", "content").unwrap_err();
    assert!(err.to_string().contains("title and content"));

    let note = book.add(&mut store, "Wifi voucher", "code 1234").unwrap();
    assert_eq!(book.all()[0].id, note.id);
    assert_eq!(book.all().len(), 4);
}

#[test]
fn note_sharing_is_restricted_to_the_vault_domain() {
    let (_dir, mut store) = temp_store();
    let mut book = NoteBook::load(&mut store).unwrap();

    let err = book
        .share(&mut store, "1", "friend@gmail.com")
        .unwrap_err();
    assert!(err.to_string().contains("@securevault.com"));

    book.share(&mut store, "1", "coworker@securevault.com").unwrap();
    assert_eq!(book.get("1").unwrap().shared_with, ["coworker@securevault.com"]);

    let err = book
        .share(&mut store, "1", "coworker@securevault.com")
        .unwrap_err();
    assert!(err.to_string().contains("already shared"));
}

#[test]
fn unshare_removes_exactly_that_address() {
    let (_dir, mut store) = temp_store();
    let mut book = NoteBook::load(&mut store).unwrap();
    book.share(&mut store, "2", "a@securevault.com").unwrap();
    book.share(&mut store, "2", "b@securevault.com").unwrap();

    book.unshare(&mut store, "2", "a@securevault.com").unwrap();
    assert_eq!(book.get("2").unwrap().shared_with, ["b@securevault.com"]);

    let err = book.unshare(&mut store, "2", "a@securevault.com").unwrap_err();
    assert!(err.to_string().contains("does not have access"));
}

#[test]
fn deleted_notes_stay_deleted_across_reloads() {
    let (_dir, mut store) = temp_store();
    {
        let mut book = NoteBook::load(&mut store).unwrap();
        book.delete(&mut store, "2").unwrap();
    }
    let book = NoteBook::load(&mut store).unwrap();
    assert_eq!(book.all().len(), 2);
    assert!(book.get("2").is_err());
}

#[test]
fn documents_seed_with_sharing_state() {
    let (_dir, mut store) = temp_store();
    let library = DocumentLibrary::load(&mut store).unwrap();
    assert_eq!(library.all().len(), 5);

    let passport = library.get("1").unwrap();
    assert!(passport.is_shared);
    assert_eq!(passport.shared_with, ["admin@securevault.com"]);

    let statement = library.get("2").unwrap();
    assert!(!statement.is_shared);
}

#[test]
fn document_search_matches_names_case_insensitively() {
    let (_dir, mut store) = temp_store();
    let library = DocumentLibrary::load(&mut store).unwrap();
    assert_eq!(library.search("bank_statement").len(), 1);
    assert_eq!(library.search(".pdf").len(), 3);
}

#[test]
fn sharing_a_document_accepts_any_address_and_marks_it_shared() {
    let (_dir, mut store) = temp_store();
    let mut library = DocumentLibrary::load(&mut store).unwrap();

    let err = library.share(&mut store, "3", "  ").unwrap_err();
    assert!(err.to_string().contains("email required"));

    library.share(&mut store, "3", "spouse@gmail.com").unwrap();
    let license = library.get("3").unwrap();
    assert!(license.is_shared);
    assert_eq!(license.shared_with, ["spouse@gmail.com"]);
}

#[test]
fn deleting_a_document_is_permanent() {
    let (_dir, mut store) = temp_store();
    {
        let mut library = DocumentLibrary::load(&mut store).unwrap();
        let removed = library.delete(&mut store, "5").unwrap();
        assert_eq!(removed.name, "Contract_Draft.docx");
    }
    let library = DocumentLibrary::load(&mut store).unwrap();
    assert_eq!(library.all().len(), 4);
}
