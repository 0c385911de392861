mod home;
mod js;
mod styles;
mod submit;

use maud::{html, Markup, Render, DOCTYPE};

use super::RouteType;

pub fn routes() -> Vec<RouteType> {
    [styles::routes(), home::routes(), js::routes(), submit::routes()].concat()
}

fn page(content: impl Render, title: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta charset="utf-8";

                title { "Temporary Text Bin" @if let Some(title) = title { " - " (title) } }

                link rel="stylesheet" href=(styles::PATH);
            }

            body {
                main { (content) }

                footer {
                    a href="/apidoc/scalar" {
                        "API"
                    }

                    a #repository href=(env!("CARGO_PKG_REPOSITORY")) {
                        (env!("CARGO_PKG_NAME")) " " (env!("CARGO_PKG_VERSION"))
                    }
                }
            }
        }
    }
}
