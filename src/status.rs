// src/status.rs
//! Status catalog.
//!
//! Maps the free-text labels the site prints in its status column onto a closed set of
//! kinds. Each kind carries a display color, a display text and a sort weight; the
//! weight only drives ordering in the menu (higher = shown first).
//!
//! Anything the catalog does not know resolves to [`StatusKind::Unrecognized`], which
//! sorts above everything else and is painted red so a new site label gets noticed.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Unknown,
    OnTheWay,
    Processing,
    Packed,
    Shipped,
    Customs,
    Ready,
    WaitingForCourier,
    Unrecognized,
}

use StatusKind::*;

impl StatusKind {
    /// Every kind the site can report, i.e. everything except `Unrecognized`.
    pub const KNOWN: [StatusKind; 8] = [
        Unknown,
        OnTheWay,
        Processing,
        Packed,
        Shipped,
        Customs,
        Ready,
        WaitingForCourier,
    ];

    /// Exact match against the known labels; no trimming or case folding here.
    pub fn from_label(raw: &str) -> StatusKind {
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.label() == raw)
            .unwrap_or(Unrecognized)
    }

    /// Label as printed by the site.
    pub fn label(self) -> &'static str {
        match self {
            Unknown => "Статус неизвестен",
            OnTheWay => "В пути",
            Processing => "В обработке",
            Packed => "Упакованные",
            Shipped => "Отправленные",
            Customs => "Растаможить товар",
            Ready => "Готово к выдаче",
            WaitingForCourier => "Ожидает курьера",
            Unrecognized => "Неизвестный статус",
        }
    }

    /// Stable name, as stored in the status cache.
    pub fn name(self) -> &'static str {
        match self {
            Unknown => "UNKNOWN",
            OnTheWay => "ON_THE_WAY",
            Processing => "PROCESSING",
            Packed => "PACKED",
            Shipped => "SHIPPED",
            Customs => "CUSTOMS",
            Ready => "READY",
            WaitingForCourier => "WAITING_FOR_COURIER",
            Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            OnTheWay | Unknown => "#cccccc",
            Processing => "#af3a94",
            Packed => "#2090d1",
            Shipped => "#ff8c00",
            Ready => "#3eb950",
            Unrecognized | Customs => "#ff0000",
            WaitingForCourier => "#ffc80a",
        }
    }

    /// Short menu text; falls back to the site label.
    pub fn text(self) -> &'static str {
        match self {
            Unknown => "Неизвестен",
            Packed => "Упаковано",
            Shipped => "Отправлено",
            Customs => "Растаможка",
            other => other.label(),
        }
    }

    pub fn weight(self) -> u32 {
        match self {
            Unrecognized => 100,
            Ready => 13,
            WaitingForCourier => 12,
            Customs => 11,
            Shipped => 10,
            Packed => 9,
            Processing => 5,
            OnTheWay => 4,
            Unknown => 1,
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
