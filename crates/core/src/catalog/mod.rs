//! Product image path resolution.
//!
//! Catalog photos are never registered anywhere; they sit under a fixed
//! directory layout (`/images/categorias/{category}/{product folder}/`) with
//! filenames that follow loose conventions. The resolver guesses candidate
//! paths from those conventions and leaves verification to [`image_exists`].

mod paths;
mod probe;

pub use paths::{
    all_image_paths, candidate_image_filenames, main_image_path, product_code,
    ALL_IMAGE_FILENAMES, IMAGE_BASE,
};
pub use probe::{image_exists, image_exists_with_timeout, ProbeConfig};
