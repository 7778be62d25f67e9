use gl2d_renderer::{
    Error, MatrixUniform, ProgramBuilder, Surface, Transform2d, TRANSFORM2D_FRAGMENT_GLSL,
    TRANSFORM2D_VERTEX_GLSL,
};
use web_sys::{console, WebGl2RenderingContext as GL};

// right triangle with 400px legs, in pixel space
const TRIANGLE: [f32; 6] = [0.0, 0.0, 400.0, 0.0, 0.0, 400.0];

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    // shader setup logs compile/link progress and dropped units
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        console::warn_1(&format!("logger already installed: {e}").into());
    }

    if let Err(e) = run() {
        console::error_1(&e.to_string().into());
    }
}

fn run() -> Result<(), Error> {
    let surface = Surface::create("canvas")?;
    let gl = surface.gl();

    let program = ProgramBuilder::new(gl)
        .vertex(TRANSFORM2D_VERTEX_GLSL)
        .fragment(TRANSFORM2D_FRAGMENT_GLSL)
        .attrib_at("a_position", 0)
        .build()?;

    let u_matrix = MatrixUniform::lookup(gl, &program, "u_matrix")?;
    let u_color = gl
        .get_uniform_location(program.program(), "u_color")
        .ok_or(Error::uniform_location_failed("u_color"))?;

    surface.static_vertex_buffer(&TRIANGLE)?;

    let mut transform = Transform2d::<f32>::new();
    transform.set_translation_x(200.0);
    transform.set_translation_y(150.0);
    transform.set_angle_degrees(30.0);

    surface.reset_viewport();
    surface.clear(0.0, 0.0, 0.0, 0.0);

    program.use_program(gl);
    gl.enable_vertex_attrib_array(0);
    gl.vertex_attrib_pointer_with_i32(0, 2, GL::FLOAT, false, 0, 0);
    gl.uniform4f(Some(&u_color), 0.2, 0.6, 0.9, 1.0);

    let (width, height) = surface.canvas_size();
    u_matrix.upload(gl, &transform.matrix(width as f32, height as f32));

    gl.draw_arrays(GL::TRIANGLES, 0, 3);

    console::log_1(&format!("drew triangle on {width}x{height} canvas").into());
    Ok(())
}
