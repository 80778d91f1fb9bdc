//! Fallback URL encoding for the three URL modes, plus template
//! substitution and the query-string append helper shared with matched
//! rules.

use crate::config::schema::{SystemConfig, UrlMode};
use crate::context::Params;

/// Append parameters to a URL as query-string pairs.
///
/// The join separator before the first appended pair is `?` if the URL does
/// not already contain one, `&` otherwise. Absent-valued params are dropped.
/// No trailing separator is left behind a pair.
///
/// ```
/// use mcaroute::{url_append, Params};
///
/// let params: Params = [("x", "1")].into();
/// assert_eq!(url_append("/a/b", &params), "/a/b?x=1");
/// assert_eq!(url_append("/a/b?y=2", &params), "/a/b?y=2&x=1");
/// ```
#[must_use]
pub fn url_append(url: &str, params: &Params) -> String {
    let mut out = String::with_capacity(url.len() + 16 * params.len());
    out.push_str(url);
    out.push(if url.contains('?') { '&' } else { '?' });
    for (key, value) in params.present() {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('&');
    }
    out.truncate(out.trim_end_matches('&').len());
    out
}

/// Finish a matched rule's output template: substitute each param whose key
/// appears as a `{key}` placeholder, append the rest as query-string pairs,
/// and trim any leading/trailing `?`.
pub(crate) fn finish_template(template: &str, params: &Params) -> String {
    let mut out = template.to_string();
    let mut rest = Params::new();
    for (key, value) in params.present() {
        let placeholder = format!("{{{key}}}");
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, value);
        } else {
            rest.insert(key, value);
        }
    }
    url_append(&out, &rest).trim_matches('?').to_string()
}

/// Encode the resolved MCA triple and params under the configured URL mode.
/// This is the fallback used when no declarative or callback rule matched.
pub(crate) fn encode_fallback(
    system: &SystemConfig,
    mca_names: &[String; 3],
    module: &str,
    controller: &str,
    action: &str,
    params: &Params,
) -> String {
    let mut url = system.host.clone();

    if system.url_mode == UrlMode::Path {
        // host/module/controller/action/k1/v1/.../ with empty parts omitted;
        // an empty controller also omits the action.
        if !module.is_empty() {
            url.push_str(module);
            url.push('/');
        }
        if !controller.is_empty() {
            url.push_str(controller);
            url.push('/');
            if !action.is_empty() {
                url.push_str(action);
                url.push('/');
            }
        }
        for (key, value) in params.present() {
            url.push_str(key);
            url.push('/');
            url.push_str(&urlencoding::encode(value));
            url.push('/');
        }
        return url.trim_matches('?').to_string();
    }

    if system.url_mode == UrlMode::Traditional {
        url.push_str("index.php");
    }
    url.push('?');

    let [m_name, c_name, a_name] = mca_names;
    for (name, value) in [(m_name, module), (c_name, controller), (a_name, action)] {
        if !value.is_empty() {
            url.push_str(name);
            url.push('=');
            url.push_str(value);
            url.push('&');
        }
    }
    for (key, value) in params.present() {
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
        url.push('&');
    }

    url.trim_end_matches('&').trim_matches('?').to_string()
}
