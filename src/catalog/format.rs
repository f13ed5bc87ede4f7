//! Catalog document schema

use crate::codec::display_window_transformer;
use crate::schema::SchemaNode;

/// Schema of the catalog file.
///
/// `display_period` is rewritten from `{start, end, time_zone}` into
/// `{start_time, end_time}` epoch seconds.
pub fn catalog_schema() -> SchemaNode {
    SchemaNode::object([
        ("version", SchemaNode::int()),
        ("pub_timestamp", SchemaNode::int()),
        (
            "ad_content",
            SchemaNode::list_of(SchemaNode::object([
                ("id", SchemaNode::int()),
                ("content", SchemaNode::object([("img_url", SchemaNode::string())])),
                (
                    "display_period",
                    SchemaNode::transform("display_period", display_window_transformer),
                ),
            ])),
        ),
    ])
}
