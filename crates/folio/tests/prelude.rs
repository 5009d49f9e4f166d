//! The prelude is enough to drive a full card.

use std::time::Duration;

use folio::prelude::*;

#[test]
fn card_icons_and_labels_compose() {
    let mut card = ProfileCard::default();
    card.initialize();
    card.advance(Duration::from_secs(2));
    assert_eq!(card.state().displayed_handle(), "juinc");

    let icons = IconRegistry::with_defaults();
    assert!(icons.contains("GitHub", Some("social")));
    assert!(icons.tech().get("Vue").is_some());

    let mut tr = Translator::bundled().unwrap();
    tr.set_locale("ro");
    assert_ne!(tr.t("profile.switch"), "profile.switch");
}

#[test]
fn errors_convert_into_facade_error() {
    fn build() -> Result<ProfileList> {
        Ok(ProfileList::new(Vec::new())?)
    }
    let err = build().unwrap_err();
    assert!(matches!(err, Error::Profile(_)));
    assert_eq!(err.to_string(), "profile list must not be empty");

    let parsed: Result<Rgb> = "#zzz".parse::<Rgb>().map_err(Error::from);
    assert!(matches!(parsed, Err(Error::Color(_))));
}
