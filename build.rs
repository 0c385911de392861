use chrono::{SecondsFormat, Utc};

fn main() {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={timestamp}");
}
