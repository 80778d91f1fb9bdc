use mcaroute::{url_append, Params};

#[test]
fn appends_with_question_mark_when_none_present() {
    let params: Params = [("x", "1")].into();
    assert_eq!(url_append("/a/b", &params), "/a/b?x=1");
}

#[test]
fn appends_with_ampersand_when_query_exists() {
    let params: Params = [("x", "1")].into();
    assert_eq!(url_append("/a/b?y=2", &params), "/a/b?y=2&x=1");
}

#[test]
fn preserves_parameter_order() {
    let params: Params = [("z", "1"), ("a", "2"), ("m", "3")].into();
    assert_eq!(url_append("/p", &params), "/p?z=1&a=2&m=3");
}

#[test]
fn drops_absent_values() {
    let mut params = Params::new();
    params.insert("x", "1");
    params.insert_opt("gone", None);
    params.insert("y", "2");
    assert_eq!(url_append("/p", &params), "/p?x=1&y=2");
}

#[test]
fn no_trailing_separator() {
    let params: Params = [("x", "1")].into();
    let out = url_append("/p", &params);
    assert!(!out.ends_with('&'));
}
