use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("static/js")
}

pub(crate) fn default_filename() -> String {
    "[name].js".to_string()
}

pub(crate) fn default_css_filename() -> String {
    "../css/[name].css".to_string()
}

pub(crate) fn default_min_chunks() -> usize {
    1
}

pub(crate) fn default_common_min_chunks() -> usize {
    2
}

pub(crate) fn default_vendor_test() -> String {
    r"[\\/]node_modules[\\/]".to_string()
}

pub(crate) fn default_common_name() -> String {
    "common".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
