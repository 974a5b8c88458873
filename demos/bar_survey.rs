//! A grouped bar chart of a made-up survey: what percentage of people in
//! each age group likes basil or cilantro?
//!
//! Writes `example_bar_plot.svg` and `example_bar_plot.png` in the current
//! directory. The figure spans exactly one column of the target document
//! class, so it can be included without scaling.
use std::error::Error;

use pubfig::{BarGroup, LegendPlacement, PlotOptions, Series, Style, bar_chart};

fn main() -> Result<(), Box<dyn Error>> {
    // Every series is one element of the group; values and errors line up
    // with the category labels. So 32% of people between 13 and 17 like
    // cilantro, give or take 2 points.
    let group = BarGroup::new(
        vec!["0-12", "13-17", "18-29", "30-49", "50+"],
        vec![
            Series::new(
                "Cilantro",
                vec![12.0, 32.0, 48.0, 41.0, 85.0],
                vec![1.0, 2.0, 1.0, 10.0, 20.0],
            ),
            Series::new(
                "Basil",
                vec![84.0, 72.0, 99.0, 87.0, 60.0],
                vec![5.0, 6.0, 2.0, 10.0, 18.0],
            ),
        ],
    );

    let style = Style::default();

    // The legend goes above the plot, in two columns, so it cannot overlap
    // the data.
    let opts = PlotOptions::new()
        .with_x_label("Age group")
        .with_y_label("Fraction of people (%)")
        .with_legend(LegendPlacement::OutTop)
        .with_legend_columns(2);

    let dest_dir = std::env::current_dir()?;
    bar_chart(&group, "example_bar_plot", &dest_dir, &style, &opts)?;

    println!("wrote example_bar_plot.svg and example_bar_plot.png");
    Ok(())
}
