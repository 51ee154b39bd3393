// src/utils/url.rs

//! Partition URL builders.

use url::Url;

use crate::error::Result;

/// URL for one page of a name-index partition.
///
/// Page 1 is the bare letter directory; later pages use the site's
/// "moreN.html" suffix.
pub fn name_index_url(base: &Url, letter: char, page: u32) -> Result<Url> {
    let path = if page > 1 {
        format!("{letter}/more{page}.html")
    } else {
        format!("{letter}/")
    };
    Ok(base.join(&path)?)
}

/// URL for one calendar day, zero-padded the way the site expects.
pub fn calendar_url(base: &Url, month: u32, day: u32) -> Result<Url> {
    Ok(base.join(&format!("{month:02}/{day:02}"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://www.santiebeati.it").unwrap()
    }

    #[test]
    fn first_page_has_no_suffix() {
        let url = name_index_url(&base(), 'A', 1).unwrap();
        assert_eq!(url.as_str(), "http://www.santiebeati.it/A/");
    }

    #[test]
    fn later_pages_use_more_suffix() {
        let url = name_index_url(&base(), 'A', 2).unwrap();
        assert_eq!(url.as_str(), "http://www.santiebeati.it/A/more2.html");

        let url = name_index_url(&base(), 'Z', 17).unwrap();
        assert_eq!(url.as_str(), "http://www.santiebeati.it/Z/more17.html");
    }

    #[test]
    fn calendar_url_is_zero_padded() {
        let url = calendar_url(&base(), 3, 5).unwrap();
        assert_eq!(url.as_str(), "http://www.santiebeati.it/03/05");

        let url = calendar_url(&base(), 12, 25).unwrap();
        assert_eq!(url.as_str(), "http://www.santiebeati.it/12/25");
    }
}
