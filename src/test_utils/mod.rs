#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod server;

pub(crate) use form::{
    assert_checked_radio, assert_form_input_with_value, assert_form_submit_button,
    assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, count_elements, element_text, must_select_one, parse_html_document,
    parse_html_fragment,
};
pub(crate) use http::{assert_html_content_type, assert_status};
pub(crate) use server::{spawn_json_server, spawn_recording_server, unreachable_url};
