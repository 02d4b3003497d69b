//! Page locations and deep-link URIs
//!
//! Deep links come in two forms: the query form `?id=<anchor>` used by framed views, and the
//! fragment form `#<anchor>` used by top-level views. A location is in query mode when its query
//! starts with `id=`.

use crate::error::NavigationError;
use url::Url;

/// Which deep-link form to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriForm {
    Query,
    Fragment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn parse(href: &str) -> Result<Self, NavigationError> {
        let url = Url::parse(href).map_err(|source| NavigationError::InvalidLocation {
            href: href.to_string(),
            source,
        })?;
        Ok(Location { url })
    }

    /// The location without query and fragment.
    pub fn base(&self) -> String {
        self.base_url().into()
    }

    fn base_url(&self) -> Url {
        let mut base = self.url.clone();
        base.set_query(None);
        base.set_fragment(None);
        base
    }

    pub fn is_query_mode(&self) -> bool {
        self.url.query().is_some_and(|q| q.starts_with("id="))
    }

    /// The anchor id requested through the query form, if any: everything after `id=`,
    /// percent-decoded. `+` is kept literally, operator names are valid ids.
    pub fn requested_id(&self) -> Option<String> {
        let raw = self.url.query()?.strip_prefix("id=")?;
        let id = urlencoding::decode(raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        Some(id).filter(|id| !id.is_empty())
    }

    /// The form deep links take for this location.
    pub fn form(&self) -> UriForm {
        if self.is_query_mode() {
            UriForm::Query
        } else {
            UriForm::Fragment
        }
    }

    /// The deep link to `id` in the given form, or the bare base when there is no id.
    pub fn full_uri(&self, id: Option<&str>, form: UriForm) -> String {
        let mut uri = self.base_url();
        match (id, form) {
            (None, _) => {}
            (Some(id), UriForm::Query) => {
                uri.set_query(Some(&format!("id={}", urlencoding::encode(id))));
            }
            (Some(id), UriForm::Fragment) => uri.set_fragment(Some(id)),
        }
        uri.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://host/doc.html?id=foo", true, Some("foo"))]
    #[case("http://host/doc.html?id=foo#bar", true, Some("foo"))]
    #[case("http://host/doc.html?id=", true, None)]
    #[case("http://host/doc.html?x=1&id=foo", false, None)]
    #[case("http://host/doc.html#foo", false, None)]
    #[case("file:///tmp/doc.html", false, None)]
    fn parses_requests(
        #[case] href: &str,
        #[case] query_mode: bool,
        #[case] requested: Option<&str>,
    ) {
        let location = Location::parse(href).unwrap();
        assert_eq!(location.is_query_mode(), query_mode);
        assert_eq!(location.requested_id().as_deref(), requested);
    }

    #[rstest]
    #[case("http://host/Ops.html?id=Ops.%2B%2B", "Ops.++")]
    #[case("http://host/Ops.html?id=Ops.++", "Ops.++")]
    #[case("http://host/Ops.html?id=Ops.%3C%3D", "Ops.<=")]
    fn operator_ids_keep_plus_signs(#[case] href: &str, #[case] id: &str) {
        let location = Location::parse(href).unwrap();
        assert_eq!(location.requested_id().as_deref(), Some(id));
    }

    #[test]
    fn query_form_round_trips_operator_ids() {
        let location = Location::parse("http://host/Ops.html").unwrap();
        let uri = location.full_uri(Some("Ops.+"), UriForm::Query);
        assert_eq!(uri, "http://host/Ops.html?id=Ops.%2B");
        assert_eq!(
            Location::parse(&uri).unwrap().requested_id().as_deref(),
            Some("Ops.+")
        );
    }

    #[test]
    fn base_drops_query_and_fragment() {
        let location = Location::parse("http://host/dir/doc.html?id=foo#frag").unwrap();
        assert_eq!(location.base(), "http://host/dir/doc.html");
    }

    #[test]
    fn builds_both_forms() {
        let location = Location::parse("http://host/doc.html?id=foo").unwrap();
        assert_eq!(
            location.full_uri(Some("Counter.count"), UriForm::Query),
            "http://host/doc.html?id=Counter.count"
        );
        assert_eq!(
            location.full_uri(Some("Counter.count"), UriForm::Fragment),
            "http://host/doc.html#Counter.count"
        );
        assert_eq!(location.full_uri(None, UriForm::Query), "http://host/doc.html");
    }

    #[test]
    fn form_follows_mode() {
        assert_eq!(
            Location::parse("http://h/d?id=a").unwrap().form(),
            UriForm::Query
        );
        assert_eq!(Location::parse("http://h/d#a").unwrap().form(), UriForm::Fragment);
    }

    #[test]
    fn relative_locations_are_rejected() {
        assert!(matches!(
            Location::parse("doc.html?id=foo"),
            Err(NavigationError::InvalidLocation { .. })
        ));
    }
}
