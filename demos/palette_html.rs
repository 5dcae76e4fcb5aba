use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use pigment::{ColorRange, Palette, Rgb, DEFAULT_ANALOGOUS_RANGE,
              DEFAULT_PALETTE_COUNT};
use pigment::utils::{self, ColorBlindness, HarmonyScheme};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[Rgb],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}\"></td>")?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        let c = c.to_grayscale();
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {c}\"></td>")?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn gradient(fh: &mut impl Write, c0: &str, c1: &str, n: usize,
            width: u32) -> Result<(), Err> {
    let p = Palette::gradient(c0.parse()?, c1.parse()?, n);
    table_of_colors(fh, p.colors(), width, &format!("{c0} → {c1}"))
}

fn palette(fh: &mut impl Write, p: &Palette, comment: &str) -> Result<(), Err> {
    table_of_colors(fh, p.colors(), 40, &format!("{comment} ({} colors)", p.len()))?;
    let interpolated = p.continuous().samples(128);
    table_of_colors(fh, &interpolated, 1, &format!("{comment} (interpolated)"))
}

fn text_samples(fh: &mut impl Write, backgrounds: &[Rgb]) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border-spacing: 4px\"><tr>")?;
    for &bg in backgrounds {
        let fg = utils::best_contrast_color(bg);
        let level = utils::check_accessibility(fg, bg, false);
        writeln!(fh, "  <td style=\"padding: 6px; color: {fg}; \
                      background-color: {bg}\">{:.1}:1<br/>{level:?}</td>",
                 utils::contrast_ratio(fg, bg))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}


fn main() -> Result<(), Err> {
    let path = env::args().nth(1).unwrap_or_else(|| "palettes.html".into());
    let mut fh = BufWriter::new(File::create(&path)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Pigment: palettes</title>\n\
                  </head>\n\
                  <body>")?;

    writeln!(fh, "<h3>Gradients</h3>")?;
    gradient(&mut fh, "#5e0063", "#ffebaa", 10, 43)?;
    gradient(&mut fh, "#5e0063", "#ffebaa", 30, 13)?;
    gradient(&mut fh, "#5e0063", "#ffebaa", 150, 1)?;
    gradient(&mut fh, "#f00", "#00f", 150, 1)?;
    gradient(&mut fh, "#000", "#fff", 150, 1)?;
    let stops = [Rgb::red(), Rgb::yellow(), Rgb::green(), Rgb::cyan(),
                 Rgb::blue(), Rgb::magenta()];
    let p = Palette::multi_gradient(&stops, 25);
    table_of_colors(&mut fh, p.colors(), 1, "multi-stop")?;

    writeln!(fh, "<h3>Predefined palettes</h3>")?;
    palette(&mut fh, &Palette::material_design(), "material design")?;
    palette(&mut fh, &Palette::warm(), "warm")?;
    palette(&mut fh, &Palette::cool(), "cool")?;

    writeln!(fh, "<h3>Generated palettes</h3>")?;
    let base: Rgb = "#3498db".parse()?;
    palette(&mut fh, &Palette::monochromatic(base, DEFAULT_PALETTE_COUNT),
            &format!("monochromatic {base}"))?;
    palette(&mut fh, &Palette::analogous(base, DEFAULT_PALETTE_COUNT,
                                         DEFAULT_ANALOGOUS_RANGE),
            &format!("analogous {base}"))?;
    palette(&mut fh, &Palette::pastel(8), "pastel")?;
    palette(&mut fh, &Palette::vibrant(8), "vibrant")?;

    writeln!(fh, "<h3>Harmonies</h3>")?;
    for scheme in HarmonyScheme::ALL {
        table_of_colors(&mut fh, &scheme.colors(base), 40, scheme.label())?;
    }

    writeln!(fh, "<h3>Color blindness</h3>")?;
    let material = Palette::material_design();
    table_of_colors(&mut fh, material.colors(), 40, "normal vision")?;
    for kind in ColorBlindness::ALL {
        let seen: Vec<Rgb> = material.iter().map(|&c| kind.simulate(c)).collect();
        table_of_colors(&mut fh, &seen, 40, &format!("{kind:?}"))?;
    }

    writeln!(fh, "<h3>Text contrast</h3>")?;
    text_samples(&mut fh, material.colors())?;
    let mut sorted = material.colors().to_vec();
    utils::sort_by_brightness(&mut sorted);
    table_of_colors(&mut fh, &sorted, 40, "sorted by brightness")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
