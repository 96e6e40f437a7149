use tempfile::TempDir;

use super::write_pack;
use crate::error::LexiconError;
use crate::language_pack::{
    Absence, EXCLUSION_LIST_FILE, FORWARD_MAP_FILE, LanguagePack, REVERSE_MAP_FILE, Resource,
    ResourceKind, list_languages, resolve,
};

#[test]
fn resolves_all_present_resources() {
    let base = TempDir::new().unwrap();
    write_pack(
        base.path(),
        "slovene",
        &[
            (FORWARD_MAP_FILE, "{}"),
            (REVERSE_MAP_FILE, "{}"),
            (EXCLUSION_LIST_FILE, ""),
        ],
    );

    let pack = resolve("slovene", base.path()).unwrap();
    assert_eq!(pack.id(), "slovene");
    assert_eq!(pack.dir(), base.path().join("slovene"));
    assert!(pack.resource(ResourceKind::ForwardMap).is_present());
    assert!(pack.resource(ResourceKind::ReverseMap).is_present());
    assert!(pack.resource(ResourceKind::ExclusionList).is_present());
    assert!(!pack.is_empty());
}

#[test]
fn missing_files_are_recorded_as_absent() {
    let base = TempDir::new().unwrap();
    write_pack(base.path(), "pali", &[(REVERSE_MAP_FILE, "{}")]);

    let pack = LanguagePack::resolve("pali", base.path()).unwrap();
    assert_eq!(
        pack.resource(ResourceKind::ExclusionList),
        &Resource::Absent {
            path: base.path().join("pali").join(EXCLUSION_LIST_FILE),
            reason: Absence::NotFound,
        }
    );
    assert!(pack.resource(ResourceKind::ExclusionList).path().is_none());
}

#[test]
fn directory_in_place_of_file_is_not_a_file() {
    let base = TempDir::new().unwrap();
    write_pack(base.path(), "pali", &[]);
    std::fs::create_dir(base.path().join("pali").join(REVERSE_MAP_FILE)).unwrap();

    let pack = resolve("pali", base.path()).unwrap();
    assert!(matches!(
        pack.resource(ResourceKind::ReverseMap),
        Resource::Absent {
            reason: Absence::NotAFile,
            ..
        }
    ));
}

#[test]
fn pack_without_maps_is_empty_but_valid() {
    let base = TempDir::new().unwrap();
    write_pack(base.path(), "latin", &[(EXCLUSION_LIST_FILE, "esse\n")]);

    let pack = resolve("latin", base.path()).unwrap();
    assert!(pack.is_empty());
}

#[test]
fn forward_map_without_reverse_map_is_missing_capability() {
    let base = TempDir::new().unwrap();
    write_pack(base.path(), "slovene", &[(FORWARD_MAP_FILE, "{}")]);

    let err = resolve("slovene", base.path()).unwrap_err();
    assert!(matches!(err, LexiconError::MissingCapability { language } if language == "slovene"));
}

#[test]
fn unknown_language_is_unsupported() {
    let base = TempDir::new().unwrap();
    let err = resolve("klingon", base.path()).unwrap_err();
    assert!(matches!(err, LexiconError::UnsupportedLanguage { .. }));
}

#[test]
fn path_like_identifiers_are_unsupported() {
    let base = TempDir::new().unwrap();
    write_pack(base.path(), "slovene", &[]);

    for id in ["", ".", "..", "../slovene", "slovene/..", "a\\b"] {
        let err = resolve(id, base.path()).unwrap_err();
        assert!(
            matches!(err, LexiconError::UnsupportedLanguage { .. }),
            "{id:?} should be rejected"
        );
    }
}

#[test]
fn lists_pack_directories_sorted() {
    let base = TempDir::new().unwrap();
    write_pack(base.path(), "slovene", &[]);
    write_pack(base.path(), "pali", &[]);
    std::fs::write(base.path().join("README"), "not a pack").unwrap();

    assert_eq!(list_languages(base.path()), ["pali", "slovene"]);
}

#[test]
fn listing_missing_base_dir_is_empty() {
    let base = TempDir::new().unwrap();
    assert!(list_languages(&base.path().join("nope")).is_empty());
}
