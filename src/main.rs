use nu_plugin::{serve_plugin, MsgPackSerializer};
use nu_plugin_page_topics::PageTopicsPlugin;

fn main() {
    serve_plugin(&PageTopicsPlugin, MsgPackSerializer {})
}
