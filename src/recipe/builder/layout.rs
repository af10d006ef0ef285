//! Source, build and package folders of one packaging run.

use crate::recipe::{
    error::{Context, ErrorExt, Result},
    identity::PackageId,
    settings::BuildType,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Folder layout. All paths are absolute.
///
/// The source folder is only read. The build folder receives the
/// generator's cache and objects, the package folder is the install prefix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    source_folder: PathBuf,
    build_folder: PathBuf,
    package_folder: PathBuf,
}

impl Layout {
    /// Build a layout, filling unset folders with their defaults:
    /// `<source>/build/<build_type>` and `<source>/package/<package_id>`.
    pub fn new(
        source_folder: &Path,
        build_folder: Option<&Path>,
        package_folder: Option<&Path>,
        build_type: BuildType,
        package_id: &PackageId,
    ) -> Result<Self> {
        let source_folder = absolute(source_folder)?;
        let build_folder = match build_folder {
            Some(path) => absolute(path)?,
            None => source_folder.join("build").join(build_type.as_str()),
        };
        let package_folder = match package_folder {
            Some(path) => absolute(path)?,
            None => source_folder.join("package").join(package_id.as_str()),
        };

        Ok(Self {
            source_folder,
            build_folder,
            package_folder,
        })
    }

    /// Folder holding the top-level `CMakeLists.txt` and `Version.txt`.
    pub fn source_folder(&self) -> &Path {
        &self.source_folder
    }

    /// Out-of-source build folder.
    pub fn build_folder(&self) -> &Path {
        &self.build_folder
    }

    /// Install prefix of the package.
    pub fn package_folder(&self) -> &Path {
        &self.package_folder
    }

    /// Create the build folder if it does not exist yet.
    pub async fn ensure_build_folder(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.build_folder)
            .await
            .fs_context("creating build folder", &self.build_folder)
    }

    /// Create the package folder if it does not exist yet.
    pub async fn ensure_package_folder(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.package_folder)
            .await
            .fs_context("creating package folder", &self.package_folder)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .context(format!("resolving absolute path of {}", path.display()))?
        .into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{identity::compute_fingerprint, settings::RecipeOptions, settings::Settings};

    fn package_id() -> PackageId {
        compute_fingerprint(&RecipeOptions::default(), &Settings::host())
    }

    #[test]
    fn defaults_nest_under_source() {
        let dir = tempfile::tempdir().unwrap();
        let id = package_id();
        let layout = Layout::new(dir.path(), None, None, BuildType::Debug, &id).unwrap();

        assert_eq!(layout.build_folder(), dir.path().join("build").join("Debug"));
        assert_eq!(
            layout.package_folder(),
            dir.path().join("package").join(id.as_str())
        );
    }

    #[test]
    fn explicit_folders_are_made_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(
            dir.path(),
            Some(Path::new("relative/build")),
            Some(Path::new("relative/pkg")),
            BuildType::Release,
            &package_id(),
        )
        .unwrap();

        assert!(layout.build_folder().is_absolute());
        assert!(layout.package_folder().ends_with("relative/pkg"));
    }

    #[tokio::test]
    async fn ensure_folders_creates_them() {
        let dir = tempfile::tempdir().unwrap();
        let layout =
            Layout::new(dir.path(), None, None, BuildType::Release, &package_id()).unwrap();
        layout.ensure_build_folder().await.unwrap();
        layout.ensure_package_folder().await.unwrap();
        assert!(layout.build_folder().is_dir());
        assert!(layout.package_folder().is_dir());
    }
}
