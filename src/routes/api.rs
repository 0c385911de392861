mod health;
mod info;

use super::RouteType;

pub fn routes() -> Vec<RouteType> {
    [health::routes(), info::routes()].concat()
}
