//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` locally. Pick a demo with `?demo=...` in the URL.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    std::process::exit(host::run());
}

// Nothing to do when the whole crate is built for the browser.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::process::{Command, Stdio};
    use std::{env, thread, time::Duration};

    use webgl_demos::DemoKind;

    const DEFAULT_PORT: u16 = 8000;

    pub fn run() -> i32 {
        let port = match env::var("DEMO_PORT") {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    log::error!("DEMO_PORT={raw} is not a port number");
                    return 2;
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        log::info!("building WASM pkg …");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(st) if st.success() => {}
            Ok(_) => {
                log::error!("wasm-pack finished with errors");
                return 1;
            }
            Err(_) => {
                log::warn!(
                    "wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/); \
                     serving whatever is already in static/pkg"
                );
            }
        }

        log::info!("serving static/ at http://127.0.0.1:{port}");
        for kind in DemoKind::ALL {
            log::info!("  http://127.0.0.1:{port}/?demo={kind}");
        }

        let mut server = match Command::new("python3")
            .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                log::error!("failed to start http server: {e}");
                return 1;
            }
        };

        loop {
            match server.try_wait() {
                Ok(Some(status)) => {
                    log::error!("http server exited: {status}");
                    return 1;
                }
                Ok(None) => thread::sleep(Duration::from_secs(1)),
                Err(e) => {
                    log::error!("lost track of http server: {e}");
                    return 1;
                }
            }
        }
    }
}
