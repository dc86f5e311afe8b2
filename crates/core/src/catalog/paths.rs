//! Candidate path guessing.

/// Root of the category image tree, as served by the storefront.
pub const IMAGE_BASE: &str = "/images/categorias";

/// Separator between the product code and the descriptive part of a
/// product folder name, e.g. `CB001 - wrench`.
const PRODUCT_CODE_SEPARATOR: &str = " - ";

/// Known gallery filenames, in priority order. These are the names the
/// photographers' exports actually use; the derived `{code}.jpg` /
/// `{code}.png` pair is always tried first.
const KNOWN_IMAGE_FILENAMES: &[&str] = &[
    "principal.jpg",
    "principal.png",
    "portada.jpg",
    "frente.jpg",
    "DSC04562 (1).jpg",
    "DSC04562.jpg",
    "DSC04563.jpg",
    "DSC04564.jpg",
    "DSC04565.jpg",
    "DSC04566.jpg",
    "DSC04567.jpg",
    "DSC04568.jpg",
    "DSC04569.jpg",
    "DSC04570.jpg",
    "IMG_0001.jpg",
    "IMG_0002.jpg",
    "IMG_0003.jpg",
    "foto1.jpg",
    "foto2.jpg",
    "foto3.jpg",
    "imagen1.jpg",
    "imagen2.jpg",
    "01.jpg",
];

/// The fixed gallery filenames returned by [`all_image_paths`].
///
/// Deliberately unrelated to the product code: the gallery helper predates
/// the code-derived naming and several product folders still rely on it.
/// Do not unify with [`candidate_image_filenames`] without auditing those
/// folders first.
pub const ALL_IMAGE_FILENAMES: [&str; 4] = [
    "DSC04562 (1).jpg",
    "DSC04563.jpg",
    "DSC04564.jpg",
    "DSC04565.jpg",
];

/// Product code of a folder name: everything before the first `" - "`.
///
/// Folders without the separator are their own code.
#[must_use]
pub fn product_code(product_folder: &str) -> &str {
    product_folder
        .split(PRODUCT_CODE_SEPARATOR)
        .next()
        .unwrap_or(product_folder)
}

/// Candidate filenames for a product's main image, in priority order:
/// `{code}.jpg`, `{code}.png`, then the known gallery names.
#[must_use]
pub fn candidate_image_filenames(product_folder: &str) -> Vec<String> {
    let code = product_code(product_folder);

    let mut candidates = Vec::with_capacity(2 + KNOWN_IMAGE_FILENAMES.len());
    candidates.push(format!("{code}.jpg"));
    candidates.push(format!("{code}.png"));
    candidates.extend(KNOWN_IMAGE_FILENAMES.iter().map(ToString::to_string));
    candidates
}

fn scoped(category_id: &str, product_folder: &str, filename: &str) -> String {
    format!("{IMAGE_BASE}/{category_id}/{product_folder}/{filename}")
}

/// Best-guess path for a product's main image.
///
/// Returns the highest-priority candidate (in practice `{code}.jpg`, the
/// head of the candidate list) scoped to the category and folder. The file
/// is not checked for existence; see [`super::image_exists`].
#[must_use]
pub fn main_image_path(category_id: &str, product_folder: &str) -> String {
    let filename = candidate_image_filenames(product_folder)
        .into_iter()
        .next()
        .unwrap_or_default();
    scoped(category_id, product_folder, &filename)
}

/// Paths of the fixed gallery set ([`ALL_IMAGE_FILENAMES`]) scoped to the
/// category and folder, regardless of the folder's product code.
#[must_use]
pub fn all_image_paths(category_id: &str, product_folder: &str) -> Vec<String> {
    ALL_IMAGE_FILENAMES
        .iter()
        .map(|filename| scoped(category_id, product_folder, filename))
        .collect()
}
