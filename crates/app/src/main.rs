//! Entry point for Veles3D.
//! A2: logging + CLI flags (backend, window size, mesh path, load policy).

use anyhow::{Context, Result};

use asset::obj::LoadOptions;

fn parse_backend_arg() -> wgpu::Backends {
    // Accept: --gpu-backend=auto|vulkan|dx12|metal|gl
    let mut backends = wgpu::Backends::all(); // default = auto
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--gpu-backend=") {
            backends = match val.to_ascii_lowercase().as_str() {
                "auto" => wgpu::Backends::all(),
                "vulkan" | "vk" => wgpu::Backends::VULKAN,
                "dx12" | "d3d12" => wgpu::Backends::DX12,
                "metal" | "mtl" => wgpu::Backends::METAL,
                "gl" | "opengl" | "gles" => wgpu::Backends::GL,
                other => {
                    eprintln!("[warn] Unknown backend '{}', falling back to auto.", other);
                    wgpu::Backends::all()
                }
            };
        }
    }
    backends
}

fn parse_size_args() -> (u32, u32) {
    let mut w: Option<u32> = None;
    let mut h: Option<u32> = None;

    for arg in std::env::args() {
        if let Some(v) = arg.strip_prefix("--size=") {
            if let Some((sw, sh)) = v.split_once('x').or_else(|| v.split_once('X')) {
                if let (Ok(pw), Ok(ph)) = (sw.parse::<u32>(), sh.parse::<u32>()) {
                    w = Some(pw);
                    h = Some(ph);
                }
            }
        } else if let Some(v) = arg.strip_prefix("--width=") {
            if let Ok(pw) = v.parse::<u32>() {
                w = Some(pw);
            }
        } else if let Some(v) = arg.strip_prefix("--height=") {
            if let Ok(ph) = v.parse::<u32>() {
                h = Some(ph);
            }
        }
    }

    let ww = w.unwrap_or(800).max(1);
    let hh = h.unwrap_or(600).max(1);
    (ww, hh)
}

fn parse_mesh_arg() -> String {
    // --mesh=path/to/model.obj, по умолчанию куб рядом с бинарём
    let mut path = String::from("assets/cube.obj");
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--mesh=") {
            path = val.to_string();
        }
    }
    path
}

fn parse_policy_arg() -> LoadOptions {
    // --load-policy=lenient|strict
    let mut options = LoadOptions::lenient();
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--load-policy=") {
            options = match val.to_ascii_lowercase().as_str() {
                "lenient" => LoadOptions::lenient(),
                "strict" => LoadOptions::strict(),
                other => {
                    eprintln!("[warn] Unknown load policy '{}', using lenient.", other);
                    LoadOptions::lenient()
                }
            };
        }
    }
    options
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let backends = parse_backend_arg();
    let (width, height) = parse_size_args();
    let mesh_path = parse_mesh_arg();
    let options = parse_policy_arg();
    log::info!(
        "Starting Veles3D. Backend: {:?}, window_size={}x{}, mesh={}, policy={:?}",
        backends,
        width,
        height,
        mesh_path,
        options.policy
    );

    let mesh = options
        .load_interleaved_from_path(&mesh_path)
        .with_context(|| format!("Failed to load mesh '{mesh_path}'"))?;
    if mesh.is_empty() {
        anyhow::bail!("Mesh '{mesh_path}' has no triangles to draw");
    }
    log::info!("Mesh ready: {} triangles", mesh.triangle_count());

    platform::run_viewer(backends, width, height, mesh)?;

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}
