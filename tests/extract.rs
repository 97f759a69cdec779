// tests/extract.rs
//
// Listing-page extraction against captured fixtures.
//
mod common;

use bayshop_bar::parcel::parcel_id;
use bayshop_bar::specs::packages;
use bayshop_bar::status::StatusKind;
use common::fixture;

#[test]
fn overview_page_rows() {
    let items = packages::extract(&fixture("mf_packages.html")).unwrap();
    assert_eq!(items.len(), 3);

    let first = &items[0];
    assert_eq!(first.id, "R100");
    assert_eq!(first.title, "R100 Кроссовки Nike Air");
    assert_eq!(first.raw_status, "Готово к выдаче");
    assert_eq!(first.status, StatusKind::Ready);
    assert_eq!(first.href.as_deref(), Some("/RU/package/view/?id=100"));

    assert_eq!(items[1].id, "R200");
    assert_eq!(items[1].status, StatusKind::Processing);
}

#[test]
fn row_without_code_or_link() {
    let items = packages::extract(&fixture("mf_packages.html")).unwrap();
    let gift = &items[2];

    assert_eq!(gift.title, "Подарок без номера");
    assert_eq!(gift.href, None);
    assert_eq!(gift.status, StatusKind::Unrecognized);
    assert_eq!(gift.display_status(), "Утеряно");
    assert_eq!(gift.id, parcel_id("Подарок без номера"));
    assert_eq!(gift.id.len(), 32);
}

#[test]
fn table_markup_is_supported() {
    let items = packages::extract(&fixture("sent.html")).unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["R300", "R301"]);
    assert_eq!(items[0].status, StatusKind::Shipped);
    assert_eq!(items[1].status, StatusKind::OnTheWay);
}

#[test]
fn empty_page_has_no_rows() {
    assert!(packages::extract(&fixture("empty.html")).unwrap().is_empty());
    assert!(packages::extract("").unwrap().is_empty());
}

#[test]
fn title_without_status_badge_is_unrecognized() {
    let html = r#"<div class="td-text"><a href="/x">R7 Лампа</a></div>"#;
    let items = packages::extract(html).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].raw_status, "");
    assert_eq!(items[0].status, StatusKind::Unrecognized);
}

#[test]
fn empty_href_counts_as_no_link() {
    let html = r#"<p class="td-text"><a href="">R8 Книга</a></p><i class="td-label">В пути</i>"#;
    let items = packages::extract(html).unwrap();
    assert_eq!(items[0].href, None);
}

#[test]
fn id_uses_leading_code_only() {
    assert_eq!(parcel_id("R12345 Куртка"), "R12345");
    assert_eq!(parcel_id("  R9 Носки"), "R9");
    assert_ne!(parcel_id("Посылка R12345"), "R12345");
}

#[test]
fn hashed_id_is_stable() {
    let a = parcel_id("Подарок без номера");
    let b = parcel_id("Подарок без номера");
    assert_eq!(a, b);
    assert_ne!(a, parcel_id("Другой подарок"));
    assert_eq!(parcel_id(""), "d41d8cd98f00b204e9800998ecf8427e");
}
