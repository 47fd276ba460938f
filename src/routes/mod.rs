mod health_routes;
mod home_routes;
mod post_routes;

pub use health_routes::health_routes;
pub use home_routes::home_routes;
pub use post_routes::post_routes;
