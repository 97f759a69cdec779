// tests/render.rs
//
// Exact menu-bar protocol output.
//
mod common;

use bayshop_bar::config::options::Theme;
use bayshop_bar::parcel::ParcelItem;
use bayshop_bar::render;
use common::{options, FakePainter};

#[test]
fn listing_with_and_without_links() {
    let items = vec![
        ParcelItem::new("R100 Ботинки", "Готово к выдаче", Some("/p/100")),
        ParcelItem::new("R200 Зарядка", "Упакованные", None),
    ];

    let out = render::listing(&items, &FakePainter, &options()).unwrap();

    assert_eq!(
        out,
        "|image=ICON(#3eb950)\n---\n\
         R100 Ботинки: Готово к выдаче | href=https://bayshop.com/p/100 color=#3eb950\n\
         R200 Зарядка: Упаковано |  color=#2090d1\n\
         ---\n\
         Обновить | href=swiftbar://refreshplugin?name=bayshop"
    );
}

#[test]
fn unrecognized_shows_raw_label_in_red() {
    let items = vec![ParcelItem::new("R1 Лампа", "Утеряно", None)];
    let line = render::parcel_line(&items[0], &options());
    assert_eq!(line, "R1 Лампа: Утеряно |  color=#ff0000\n");

    let out = render::listing(&items, &FakePainter, &options()).unwrap();
    assert!(out.starts_with("|image=ICON(#ff0000)\n"));
}

#[test]
fn custom_base_url_prefixes_links() {
    let mut opts = options();
    opts.base_url = "http://localhost:8080/".to_string();
    let item = ParcelItem::new("R5 X", "В пути", Some("/p/5"));
    assert!(render::parcel_line(&item, &opts).contains("href=http://localhost:8080/p/5 "));
}

#[test]
fn empty_listing_light_and_dark() {
    let mut opts = options();
    let light = render::listing(&[], &FakePainter, &opts).unwrap();
    assert_eq!(
        light,
        "|image=ICON(#333333)\n---\nНет посылок | color=#333333\n---\nОбновить | href=swiftbar://refreshplugin?name=bayshop"
    );

    opts.theme = Theme::from_appearance("Dark");
    let dark = render::listing(&[], &FakePainter, &opts).unwrap();
    assert!(dark.starts_with("|image=ICON(#eeeeee)\n---\nНет посылок | color=#eeeeee\n"));
}

#[test]
fn fatal_state_has_red_icon_and_no_refresh() {
    let out = render::fatal(&FakePainter, "Нет ID сессии в файле /x/.bayshop_session_id", Theme::Light).unwrap();
    assert_eq!(
        out,
        "|image=ICON(#ff0000)\n---\nНет ID сессии в файле /x/.bayshop_session_id | color=#333333"
    );
}

#[test]
fn appearance_other_than_dark_is_light() {
    assert_eq!(Theme::from_appearance("Light"), Theme::Light);
    assert_eq!(Theme::from_appearance("dark"), Theme::Light);
    assert_eq!(Theme::from_appearance("Dark").neutral_color(), "#eeeeee");
}
