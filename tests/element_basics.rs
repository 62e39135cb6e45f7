use paged_canvas::document::Document;
use paged_canvas::element::ElementKind;
use paged_canvas::error::EditorError;
use paged_canvas::page::PageId;
use egui::Pos2;

fn document_with_two_pages() -> Document {
    let mut document = Document::new();
    let second = document.pages_mut().add();
    let elements = document.elements_mut();
    elements.insert(ElementKind::Rectangle, PageId(1), Pos2::ZERO);
    elements.insert(ElementKind::Circle, second, Pos2::ZERO);
    elements.insert(ElementKind::Text, PageId(1), Pos2::ZERO);
    elements.insert(ElementKind::Rectangle, second, Pos2::ZERO);
    document
}

#[test]
fn test_delete_page_cascades_exactly_its_elements() {
    let mut document = document_with_two_pages();

    let removed = document.delete_page(PageId(1)).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(document.elements().len(), 2);
    assert!(document.elements().iter().all(|e| e.page() == PageId(2)));
}

#[test]
fn test_last_page_cannot_be_deleted() {
    let mut document = document_with_two_pages();
    document.delete_page(PageId(2)).unwrap();

    assert_eq!(document.delete_page(PageId(1)), Err(EditorError::LastPage));
    assert_eq!(document.pages().len(), 1);
    assert_eq!(document.elements().len(), 2);
}

#[test]
fn test_deleting_unknown_page_changes_nothing() {
    let mut document = document_with_two_pages();

    assert_eq!(document.delete_page(PageId(7)), Err(EditorError::PageNotFound(PageId(7))));
    assert_eq!(document.pages().len(), 2);
    assert_eq!(document.elements().len(), 4);
}

#[test]
fn test_deleting_current_page_selects_first_remaining() {
    let mut document = document_with_two_pages();
    let third = document.pages_mut().add();
    document.pages_mut().select(PageId(2)).unwrap();

    document.delete_page(PageId(2)).unwrap();
    assert_eq!(document.pages().current(), PageId(1));

    document.pages_mut().select(third).unwrap();
    document.delete_page(PageId(1)).unwrap();
    assert_eq!(document.pages().current(), third);
    assert!(document.pages().contains(document.pages().current()));
}

#[test]
fn test_deleting_other_page_keeps_selection() {
    let mut document = document_with_two_pages();
    document.delete_page(PageId(2)).unwrap();
    assert_eq!(document.pages().current(), PageId(1));
}

#[test]
fn test_rename_trims_and_rejects_blank() {
    let mut document = Document::new();
    let pages = document.pages_mut();

    assert_eq!(pages.rename(PageId(1), "   "), Err(EditorError::EmptyPageName));
    assert_eq!(pages.rename(PageId(1), ""), Err(EditorError::EmptyPageName));
    assert_eq!(pages.get(PageId(1)).unwrap().name(), "Page 1");

    assert_eq!(pages.rename(PageId(1), "  Cover  "), Ok("Cover".to_owned()));
    assert_eq!(pages.get(PageId(1)).unwrap().name(), "Cover");
}

#[test]
fn test_element_ids_unique_after_cascade() {
    let mut document = document_with_two_pages();
    document.delete_page(PageId(1)).unwrap();
    let page = document.pages().current();
    document.elements_mut().insert(ElementKind::Text, page, Pos2::ZERO);
    document.elements_mut().insert(ElementKind::Text, page, Pos2::ZERO);

    let mut ids: Vec<_> = document.elements().iter().map(|e| e.id()).collect();
    let count = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), count);
}
