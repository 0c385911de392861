use axum::routing::get;
use maud::{html, Markup};
use strum::{EnumIter, EnumMessage, IntoEnumIterator as _, IntoStaticStr};

use crate::{
    result_area::ResultView,
    routes::RouteType,
};

use super::{js, page, submit};

pub const PATH: &str = "/";

pub fn routes() -> Vec<RouteType> {
    vec![RouteType::Undocumented((PATH, get(get_home)))]
}

/// Presets offered by the expiration selector, in the service's
/// `<number><m|h|d>` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumMessage, IntoStaticStr)]
enum ExpiryOption {
    #[strum(serialize = "10m", message = "10 minutes")]
    TenMinutes,
    #[default]
    #[strum(serialize = "1h", message = "1 hour")]
    OneHour,
    #[strum(serialize = "1d", message = "1 day")]
    OneDay,
    #[strum(serialize = "7d", message = "7 days")]
    OneWeek,
}

impl ExpiryOption {
    fn value(self) -> &'static str {
        self.into()
    }

    fn is_selected(self, current: &str) -> bool {
        if current.is_empty() {
            self == Self::default()
        } else {
            self.value() == current
        }
    }
}

async fn get_home() -> Markup {
    snippet_page("", "", &ResultView::Empty)
}

/// The form with its fields holding `content` and `expires_in`, followed by
/// the result area.
pub(super) fn snippet_page(content: &str, expires_in: &str, view: &ResultView) -> Markup {
    page(
        html! {
            h1 { "Temporary Text Bin" }

            form id="snippet-form" method="post" action=(submit::PATH) {
                label for="contentText" { "Content" }
                textarea #contentText name="content" rows="12" placeholder="Paste your text here" { (content) }

                label for="expiresIn" { "Expires in" }
                select #expiresIn name="expiresIn" {
                    @for option in ExpiryOption::iter() {
                        option value=(option.value()) selected[option.is_selected(expires_in)] {
                            (option.get_message().unwrap_or(option.value()))
                        }
                    }
                }

                button #saveButton type="submit" { "Save" }
            }

            (view)

            script src=(js::PATH) {}
        },
        None,
    )
}
