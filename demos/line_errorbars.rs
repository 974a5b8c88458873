//! Two lines with symmetric error bars, sized to one document column.
//!
//! Writes `example_line_plot.svg` and `example_line_plot.png` in the
//! current directory.
use std::error::Error;

use pubfig::{PlotOptions, Style, XySeries, line_chart};

fn main() -> Result<(), Box<dyn Error>> {
    let series = vec![
        XySeries::new(
            "Data 1",
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![20.0, 30.0, 40.0, 50.0, 60.0],
            vec![2.0, 3.0, 2.0, 1.0, 3.0],
        ),
        XySeries::new(
            "Data 2",
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![20.0, 50.0, 10.0, 20.0, 30.0],
            vec![2.0, 3.0, 2.0, 1.0, 3.0],
        ),
    ];

    let style = Style::default();
    let opts = PlotOptions::new().with_x_label("x label").with_y_label("y label");

    let dest_dir = std::env::current_dir()?;
    line_chart(&series, "example_line_plot", &dest_dir, &style, &opts)?;

    println!("wrote example_line_plot.svg and example_line_plot.png");
    Ok(())
}
