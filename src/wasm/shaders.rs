// GLSL ES 3.00 sources. Attribute locations are bound before linking, see
// `program::attrib`.

pub const COLOR_VS: &str = r#"#version 300 es
in vec4 aVertexPosition;
in vec4 aVertexColor;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;

out lowp vec4 vColor;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
    vColor = aVertexColor;
}
"#;

pub const COLOR_FS: &str = r#"#version 300 es
in lowp vec4 vColor;
out lowp vec4 fragColor;

void main() {
    fragColor = vColor;
}
"#;

pub const TEXTURE_VS: &str = r#"#version 300 es
in vec4 aVertexPosition;
in vec2 aTextureCoord;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;
uniform vec2 uTexRepeat;
uniform vec2 uTexOffset;

out highp vec2 vTextureCoord;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
    vTextureCoord = aTextureCoord * uTexRepeat + uTexOffset;
}
"#;

pub const TEXTURE_FS: &str = r#"#version 300 es
precision mediump float;

in highp vec2 vTextureCoord;

uniform sampler2D uSampler;
uniform vec4 uColor;
uniform float uOpacity;

out vec4 fragColor;

void main() {
    vec4 texel = texture(uSampler, vTextureCoord) * uColor;
    fragColor = vec4(texel.rgb, texel.a * uOpacity);
}
"#;

pub const LIT_VS: &str = r#"#version 300 es
in vec4 aVertexPosition;
in vec3 aVertexNormal;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;
uniform mat4 uNormalMatrix;

out highp vec3 vNormal;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
    vNormal = (uNormalMatrix * vec4(aVertexNormal, 0.0)).xyz;
}
"#;

pub const LIT_FS: &str = r#"#version 300 es
precision mediump float;

in highp vec3 vNormal;

uniform vec3 uColor;
uniform vec3 uAmbient;
uniform vec3 uLightDirection;

out vec4 fragColor;

void main() {
    vec3 n = normalize(vNormal);
    // double sided: light whichever side faces the camera
    if (!gl_FrontFacing) {
        n = -n;
    }
    float diffuse = max(dot(n, normalize(uLightDirection)), 0.0);
    fragColor = vec4(uColor * (uAmbient + vec3(diffuse)), 1.0);
}
"#;
