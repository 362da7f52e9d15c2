mod home;
mod results;
mod state;
mod upload;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use results::ResultsView;
pub use state::ViewError;
pub use upload::UploadView;
