mod access;
mod helpers;
mod listings;
mod oauth;
mod resources;
mod routing;
