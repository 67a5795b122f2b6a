//! DIP resource selectors and their documented filters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Document categories exposed by the DIP API.
///
/// Each variant maps to the first path segment below the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    /// Legislative and parliamentary procedures.
    #[default]
    Vorgang,
    /// Individual steps within a procedure.
    Vorgangsposition,
    /// Printed papers (metadata).
    Drucksache,
    /// Printed papers including full text.
    DrucksacheText,
    /// Plenary minutes (metadata).
    Plenarprotokoll,
    /// Plenary minutes including full text.
    PlenarprotokollText,
    /// Activities of members (speeches, questions, ...).
    Aktivitaet,
    /// Persons (members, government officials).
    Person,
}

impl ResourceType {
    /// Returns all resource types in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Vorgang,
            Self::Vorgangsposition,
            Self::Drucksache,
            Self::DrucksacheText,
            Self::Plenarprotokoll,
            Self::PlenarprotokollText,
            Self::Aktivitaet,
            Self::Person,
        ]
    }

    /// Returns the path segment for this resource.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vorgang => "vorgang",
            Self::Vorgangsposition => "vorgangsposition",
            Self::Drucksache => "drucksache",
            Self::DrucksacheText => "drucksache-text",
            Self::Plenarprotokoll => "plenarprotokoll",
            Self::PlenarprotokollText => "plenarprotokoll-text",
            Self::Aktivitaet => "aktivitaet",
            Self::Person => "person",
        }
    }

    /// Returns the German display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vorgang => "Vorgänge",
            Self::Vorgangsposition => "Vorgangspositionen",
            Self::Drucksache => "Drucksachen",
            Self::DrucksacheText => "Drucksachen (Volltext)",
            Self::Plenarprotokoll => "Plenarprotokolle",
            Self::PlenarprotokollText => "Plenarprotokolle (Volltext)",
            Self::Aktivitaet => "Aktivitäten",
            Self::Person => "Personen",
        }
    }

    /// Returns the filters documented for this resource.
    #[must_use]
    pub const fn filters(self) -> &'static [FilterSpec] {
        match self {
            Self::Vorgang => VORGANG_FILTERS,
            Self::Vorgangsposition => VORGANGSPOSITION_FILTERS,
            Self::Drucksache | Self::DrucksacheText => DRUCKSACHE_FILTERS,
            Self::Plenarprotokoll | Self::PlenarprotokollText => PLENARPROTOKOLL_FILTERS,
            Self::Aktivitaet => AKTIVITAET_FILTERS,
            Self::Person => PERSON_FILTERS,
        }
    }

    /// Looks up a documented filter by its query key.
    #[must_use]
    pub fn filter(self, name: &str) -> Option<&'static FilterSpec> {
        self.filters().iter().find(|f| f.name == name)
    }

    fn expected_names() -> String {
        Self::all()
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let normalized = s.trim().trim_start_matches('/').to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownResource {
                name: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}

/// Input kind of a documented filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Single free-text value.
    Text,
    /// Free text; may be repeated, values are combined with AND.
    MultiText,
    /// Numeric value.
    Number,
    /// Date in `YYYY-MM-DD` form.
    Date,
    /// One of a fixed set of values.
    Select(&'static [SelectOption]),
}

impl FilterKind {
    /// Returns true if the filter may be sent more than once.
    #[must_use]
    pub const fn accepts_multiple(self) -> bool {
        matches!(self, Self::MultiText)
    }

    /// Short name used in listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::MultiText => "text, repeatable",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select(_) => "select",
        }
    }
}

/// An allowed value of a select filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Value sent to the API (empty means "all").
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// A filter documented for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Query key, e.g. `f.wahlperiode`.
    pub name: &'static str,
    /// German display label.
    pub label: &'static str,
    /// Input kind.
    pub kind: FilterKind,
}

impl FilterSpec {
    const fn new(name: &'static str, label: &'static str, kind: FilterKind) -> Self {
        Self { name, label, kind }
    }
}

const DOKUMENTART_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "",
        label: "Alle",
    },
    SelectOption {
        value: "Drucksache",
        label: "Drucksache",
    },
    SelectOption {
        value: "Plenarprotokoll",
        label: "Plenarprotokoll",
    },
];

const DATUM_START: FilterSpec =
    FilterSpec::new("f.datum.start", "Datum (Start)", FilterKind::Date);
const DATUM_END: FilterSpec = FilterSpec::new("f.datum.end", "Datum (Ende)", FilterKind::Date);
const WAHLPERIODE: FilterSpec =
    FilterSpec::new("f.wahlperiode", "Wahlperiode", FilterKind::Number);
const TITEL: FilterSpec = FilterSpec::new("f.titel", "Titel", FilterKind::MultiText);
const DOKUMENTART: FilterSpec = FilterSpec::new(
    "f.dokumentart",
    "Dokumentart",
    FilterKind::Select(DOKUMENTART_OPTIONS),
);

const VORGANG_FILTERS: &[FilterSpec] = &[
    TITEL,
    WAHLPERIODE,
    FilterSpec::new("f.vorgangstyp", "Vorgangstyp", FilterKind::MultiText),
    FilterSpec::new("f.beratungsstand", "Beratungsstand", FilterKind::MultiText),
    FilterSpec::new("f.initiative", "Initiative (UND)", FilterKind::MultiText),
    FilterSpec::new("f.deskriptor", "Deskriptor (UND)", FilterKind::MultiText),
    FilterSpec::new("f.sachgebiet", "Sachgebiet (UND)", FilterKind::MultiText),
    FilterSpec::new("f.urheber", "Urheber (UND)", FilterKind::MultiText),
    FilterSpec::new("f.ressort_fdf", "Federf. Ressort (UND)", FilterKind::MultiText),
    DOKUMENTART,
    DATUM_START,
    DATUM_END,
];

const VORGANGSPOSITION_FILTERS: &[FilterSpec] = &[
    FilterSpec::new("f.vorgang", "Vorgang (ID)", FilterKind::Number),
    TITEL,
    WAHLPERIODE,
    DOKUMENTART,
    DATUM_START,
    DATUM_END,
];

const DRUCKSACHE_FILTERS: &[FilterSpec] = &[
    TITEL,
    FilterSpec::new("f.drucksachetyp", "Drucksachentyp", FilterKind::Text),
    FilterSpec::new("f.dokumentnummer", "Dokumentnummer", FilterKind::MultiText),
    WAHLPERIODE,
    FilterSpec::new("f.urheber", "Urheber (UND)", FilterKind::MultiText),
    FilterSpec::new("f.ressort_fdf", "Federf. Ressort (UND)", FilterKind::MultiText),
    DATUM_START,
    DATUM_END,
];

const PLENARPROTOKOLL_FILTERS: &[FilterSpec] = &[
    FilterSpec::new("f.dokumentnummer", "Dokumentnummer", FilterKind::MultiText),
    WAHLPERIODE,
    DATUM_START,
    DATUM_END,
];

const AKTIVITAET_FILTERS: &[FilterSpec] = &[
    FilterSpec::new("f.person", "Person (Name)", FilterKind::MultiText),
    FilterSpec::new("f.person_id", "Person (ID)", FilterKind::Number),
    WAHLPERIODE,
    FilterSpec::new("f.deskriptor", "Deskriptor (UND)", FilterKind::MultiText),
    DOKUMENTART,
    DATUM_START,
    DATUM_END,
];

const PERSON_FILTERS: &[FilterSpec] = &[
    FilterSpec::new("f.person", "Name", FilterKind::MultiText),
    WAHLPERIODE,
    DATUM_START,
    DATUM_END,
];

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_has_eight_distinct_resources() {
        let all = ResourceType::all();
        assert_eq!(all.len(), 8);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_resource_from_str() {
        assert_eq!(
            "drucksache-text".parse::<ResourceType>().unwrap(),
            ResourceType::DrucksacheText
        );
        assert_eq!(
            "/Person".parse::<ResourceType>().unwrap(),
            ResourceType::Person
        );
        for resource in ResourceType::all() {
            assert_eq!(resource.as_str().parse::<ResourceType>().unwrap(), *resource);
        }
    }

    #[test]
    fn test_unknown_resource_lists_expected() {
        let err = "gesetz".parse::<ResourceType>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gesetz"));
        assert!(message.contains("plenarprotokoll-text"));
    }

    #[test]
    fn test_serde_uses_path_segment() {
        let json = serde_json::to_string(&ResourceType::PlenarprotokollText).unwrap();
        assert_eq!(json, "\"plenarprotokoll-text\"");
    }

    #[test]
    fn test_every_resource_has_filters() {
        for resource in ResourceType::all() {
            assert!(!resource.filters().is_empty(), "{resource} has no filters");
            assert!(resource.filter("f.wahlperiode").is_some());
        }
    }

    #[test]
    fn test_filter_kinds() {
        let titel = ResourceType::Vorgang.filter("f.titel").unwrap();
        assert!(titel.kind.accepts_multiple());

        let art = ResourceType::Aktivitaet.filter("f.dokumentart").unwrap();
        match art.kind {
            FilterKind::Select(options) => assert_eq!(options.len(), 3),
            other => panic!("unexpected kind {other:?}"),
        }

        assert!(ResourceType::Person.filter("f.vorgangstyp").is_none());
    }
}
