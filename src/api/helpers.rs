use crate::error::{Credential, Error};
use url::Url;

/// Checks that a credential is present and not blank.
pub fn require_credential(
    value: Option<&str>,
    credential: Credential,
) -> Result<&str, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::InvalidCredential(credential)),
    }
}

/// Checks that a listing ID is present and not blank.
pub fn require_id(id: Option<&str>) -> Result<&str, Error> {
    match id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(Error::InvalidArgument("The listing id is an invalid string or missing.")),
    }
}

/// Checks that a collection is not empty.
pub fn require_non_empty<'a, T>(
    items: &'a [T],
    message: &'static str,
) -> Result<&'a [T], Error> {
    if items.is_empty() {
        return Err(Error::InvalidArgument(message));
    }

    Ok(items)
}

/// Joins `pathname` onto `base_url`, pushes each path segment percent-encoded, and appends the
/// query pairs in order.
pub fn build_url<'a, S, Q>(
    base_url: &str,
    pathname: &str,
    segments: S,
    query: Q,
) -> Result<Url, Error>
where
    S: IntoIterator<Item = &'a str>,
    Q: IntoIterator<Item = (&'static str, String)>,
{
    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), pathname))?;

    url.path_segments_mut()
        .map_err(|_| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .extend(segments);
    url.query_pairs_mut().extend_pairs(query);

    Ok(url)
}
