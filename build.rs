use std::env;
use std::fs;
use std::path::Path;
#[cfg(target_os = "macos")]
use std::process::Command;

fn main() {
    // Get the project directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // Missing images, font or music fall back at runtime; only the layout is created here
    let assets_dir = Path::new(&manifest_dir).join("assets");
    create_asset_directories(&assets_dir);

    println!("cargo:rerun-if-changed=build.rs");

    // The simulation core builds without SDL
    if env::var_os("CARGO_FEATURE_SDL").is_some() {
        link_sdl2_libraries();
    }
}

// (homebrew formula, library name)
#[cfg(target_os = "macos")]
const SDL_LIBRARIES: [(&str, &str); 4] = [
    ("sdl2", "SDL2"),
    ("sdl2_image", "SDL2_image"),
    ("sdl2_ttf", "SDL2_ttf"),
    ("sdl2_mixer", "SDL2_mixer"),
];

fn link_sdl2_libraries() {
    #[cfg(target_os = "macos")]
    {
        if let Ok(true) = is_homebrew_available() {
            for (formula, library) in SDL_LIBRARIES.iter() {
                match get_homebrew_path(formula) {
                    Ok(prefix) => {
                        println!("cargo:rustc-link-search={}/lib", prefix);
                        println!("cargo:rustc-link-lib={}", library);
                    }
                    Err(_) => println!(
                        "cargo:warning={} not found via homebrew, install it with 'brew install {}'",
                        library, formula
                    ),
                }
            }
        } else {
            println!("cargo:warning=Homebrew not found. Install the SDL2 libraries manually.");
        }
    }

    #[cfg(target_os = "linux")]
    {
        println!("On Linux, install SDL2 with your package manager, for example:");
        println!("sudo apt-get install libsdl2-dev libsdl2-image-dev libsdl2-ttf-dev libsdl2-mixer-dev");
    }

    #[cfg(target_os = "windows")]
    {
        println!("On Windows, make sure the SDL2, SDL2_image, SDL2_ttf and SDL2_mixer libraries are in your PATH.");
    }
}

#[cfg(target_os = "macos")]
fn is_homebrew_available() -> Result<bool, String> {
    match Command::new("brew").arg("--version").output() {
        Ok(_) => Ok(true),
        Err(_) => Ok(false),
    }
}

#[cfg(target_os = "macos")]
fn get_homebrew_path(package: &str) -> Result<String, String> {
    match Command::new("brew").args(["--prefix", package]).output() {
        Ok(output) => {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(path)
            } else {
                Err(format!("Package {} not found in homebrew", package))
            }
        }
        Err(e) => Err(format!("Failed to execute brew command: {}", e)),
    }
}

fn create_asset_directories(assets_dir: &Path) {
    let fonts_dir = assets_dir.join("fonts");
    if !fonts_dir.exists() {
        fs::create_dir_all(&fonts_dir).unwrap();
    }
}
