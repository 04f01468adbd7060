use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlImageElement, WebGl2RenderingContext as GL, WebGlTexture};

use crate::error::{DemoError, Result};

/// Opaque blue, shown until the real image arrives.
const PLACEHOLDER_PIXEL: [u8; 4] = [0, 0, 255, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Clamp,
    Repeat,
}

/// Creates a texture bound to a 1x1 placeholder and starts loading `url`
/// into it. The texture is usable immediately.
pub fn load_texture(gl: &GL, url: &str, wrap: Wrap) -> Result<WebGlTexture> {
    let texture = gl
        .create_texture()
        .ok_or(DemoError::Allocation("texture"))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        1,
        1,
        0,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        Some(&PLACEHOLDER_PIXEL[..]),
    )?;
    // no mip levels yet
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);

    let image = HtmlImageElement::new()?;
    image.set_cross_origin(Some("anonymous"));

    let onload = {
        let gl = gl.clone();
        let texture = texture.clone();
        let image = image.clone();
        let url = url.to_string();
        Closure::once(move || {
            if let Err(e) = upload_image(&gl, &texture, &image, wrap) {
                log::error!("texture {url}: {e}");
                return;
            }
            log::debug!("texture {url} loaded ({}x{})", image.width(), image.height());
        })
    };
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = {
        let url = url.to_string();
        Closure::once(move || {
            log::warn!("texture {url} failed to load; keeping placeholder");
        })
    };
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    image.set_src(url);
    Ok(texture)
}

fn upload_image(gl: &GL, texture: &WebGlTexture, image: &HtmlImageElement, wrap: Wrap) -> Result<()> {
    gl.bind_texture(GL::TEXTURE_2D, Some(texture));
    // uv origin is bottom-left, images are stored top row first
    gl.pixel_storei(GL::UNPACK_FLIP_Y_WEBGL, 1);
    gl.tex_image_2d_with_u32_and_u32_and_html_image_element(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        image,
    )?;
    gl.pixel_storei(GL::UNPACK_FLIP_Y_WEBGL, 0);

    if image.width().is_power_of_two() && image.height().is_power_of_two() {
        gl.generate_mipmap(GL::TEXTURE_2D);
        gl.tex_parameteri(
            GL::TEXTURE_2D,
            GL::TEXTURE_MIN_FILTER,
            GL::LINEAR_MIPMAP_LINEAR as i32,
        );
    } else {
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
    }

    let mode = match wrap {
        Wrap::Repeat => GL::REPEAT,
        Wrap::Clamp => GL::CLAMP_TO_EDGE,
    };
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, mode as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, mode as i32);
    Ok(())
}
