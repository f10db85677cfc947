use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use color_banding::{BandLayout, BandingOptions, ColorRange, Gradient, Stop};

type Err = Box<dyn Error>;

const TICKS: [f64; 5] = [0., 0.25, 0.5, 0.75, 1.];

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn strip(fh: &mut impl Write, g: &impl ColorRange<RGB8>, n: usize,
         comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (_, c) in g.samples(n) {
        writeln!(fh, "  <td style=\"width: 1px; height: 30px; \
                      background-color: {}\"></td>", css_string(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table>")?;
    Ok(())
}

fn bandings(fh: &mut impl Write, g: &Gradient<RGB8>,
            layout: BandLayout) -> Result<(), Err> {
    for banding in [0., 0.25, 0.5, 0.75, 1.] {
        let opts = BandingOptions::new().banding(banding).layout(layout);
        let b = g.banded(&TICKS, &opts)?;
        strip(fh, &b, 400,
              &format!("banding {banding} ({} stops)", b.stops().len()))?;
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("banding.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color banding: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    let rgb = Gradient::new(vec![Stop::new(0., RGB8::new(255, 0, 0)),
                                 Stop::new(0.5, RGB8::new(0, 255, 0)),
                                 Stop::new(1., RGB8::new(0, 0, 255))])?;
    let grey = Gradient::from_colors(RGB8::new(0, 0, 0),
                                     RGB8::new(255, 255, 255));
    for (name, g) in [("Red, green, blue", &rgb), ("Black to white", &grey)] {
        writeln!(fh, "<h3>{name}: segments</h3>")?;
        bandings(&mut fh, g, BandLayout::Segments)?;
        writeln!(fh, "<h3>{name}: contour</h3>")?;
        bandings(&mut fh, g, BandLayout::Contour)?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
