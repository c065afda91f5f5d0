use drawtap::{
    Affine, Antialias, CallbackInterface, Content, FillParams, FixedPath, Glyph, GlyphMetrics,
    MemoryFont, Operator, Pattern, Rgba, Stroke, StrokeParams, SurfaceBackend,
    create_callback_surface,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let iface = CallbackInterface::new()
        .on_paint(|_s, cmd| println!("paint op={:?}", cmd.op))
        .on_fill(|_s, cmd| {
            println!(
                "fill  op={:?} nodes={} glyph={:?}",
                cmd.op,
                cmd.path.len(),
                cmd.glyph.map(|g| g.index)
            );
            for node in &cmd.path {
                println!("      {node:?}");
            }
        })
        .on_stroke(|_s, cmd| {
            println!(
                "stroke width={} dash={:?} nodes={}",
                cmd.style.line_width,
                cmd.style.dash,
                cmd.path.len()
            );
        });
    let mut surface = create_callback_surface(Some(&iface), Content::ColorAlpha);
    let ink = Pattern::solid(Rgba::new(0.1, 0.1, 0.1, 1.0));

    let mut box_path = FixedPath::new();
    box_path
        .move_to(10.0, 10.0)
        .line_to(90.0, 10.0)
        .line_to(90.0, 90.0)
        .close_path();

    surface.paint(Operator::Source, &ink, None)?;
    surface.fill(
        Operator::Over,
        &ink,
        Some(&box_path),
        FillParams::default(),
        None,
    )?;

    let style = Stroke::new(3.0).with_dashes(0.0, [4.0, 2.0]);
    let ctm = Affine::IDENTITY;
    surface.stroke(
        Operator::Over,
        &ink,
        Some(&box_path),
        StrokeParams {
            style: &style,
            ctm: &ctm,
            ctm_inverse: &ctm,
            tolerance: 0.1,
            antialias: Antialias::Default,
        },
        None,
    )?;

    let mut font = MemoryFont::new();
    let mut bar = FixedPath::new();
    bar.move_to(0.0, 0.0)
        .line_to(1.0, 0.0)
        .line_to(1.0, 8.0)
        .line_to(0.0, 8.0)
        .close_path();
    font.insert_outline(1, GlyphMetrics::default(), bar);
    font.insert_bitmap(2, GlyphMetrics::default());
    let run = [Glyph::new(1, 20.0, 50.0), Glyph::new(2, 24.0, 50.0)];
    surface.show_glyphs(Operator::Over, &ink, &run, &font, None)?;

    println!("{:?}", surface.stats());
    Ok(())
}
