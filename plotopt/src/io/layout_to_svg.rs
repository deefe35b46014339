use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;
use log::warn;
use plotpack::entities::Layout;
use svg::Document;
use svg::node::element::{Group, Text, Title};

pub fn layout_to_svg(layout: &Layout, options: SvgDrawOptions, title: &str) -> Document {
    let plot = layout.plot;
    let vbox = plot.scale(1.10);

    let theme = &options.theme;

    let stroke_width =
        f32::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the top left of the plot
        let label_content = format!(
            "width: {:.3} | height: {:.3} | density: {:.3}% | {}",
            plot.width(),
            plot.height(),
            layout.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", plot.x_min)
            .set(
                "y",
                plot.y_min - 0.5 * 0.025 * f32::min(plot.width(), plot.height()),
            )
            .set("font-size", f32::min(plot.width(), plot.height()) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw plot
    let plot_group = Group::new()
        .set("id", "plot")
        .add(svg_util::data_to_path(
            svg_util::aa_rect_data(plot),
            &[
                ("fill", &*format!("{}", theme.plot_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "plot, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
            plot.x_min, plot.y_min, plot.x_max, plot.y_max
        )));

    //draw placements
    let placements_group = {
        let mut group = Group::new().set("id", "placements");
        for (i, placement) in layout.placements.iter().enumerate() {
            let footprint = placement.footprint();
            let mut p_group = Group::new()
                .set("id", format!("placement_{i}"))
                .add(svg_util::data_to_path(
                    svg_util::aa_rect_data(footprint),
                    &[
                        ("fill", &*format!("{}", theme.footprint_fill)),
                        ("fill-opacity", "0.5"),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{}", stroke_width)),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ],
                ))
                .add(Title::new(format!(
                    "{}, x: {:.3}, y: {:.3}, w: {:.3}, h: {:.3}, indent: {:.3}, rotated: {}",
                    placement.title,
                    placement.x,
                    placement.y,
                    placement.width,
                    placement.height,
                    placement.indent,
                    placement.rotated
                )));

            if options.draw_bodies {
                match placement.body() {
                    Some(body) => {
                        let fill = match placement.rotated {
                            true => theme.rotated_body_fill,
                            false => theme.body_fill,
                        };
                        p_group = p_group.add(svg_util::data_to_path(
                            svg_util::aa_rect_data(body),
                            &[
                                ("fill", &*format!("{fill}")),
                                ("stroke", &*format!("{}", svg_util::change_brightness(fill, 0.5))),
                                ("stroke-width", &*format!("{}", stroke_width)),
                            ],
                        ));
                    }
                    None => warn!(
                        "indent of {:?} leaves no room for the building itself",
                        placement.title
                    ),
                }
            }

            if options.draw_titles {
                let font_size = f32::min(footprint.width(), footprint.height()) * 0.15;
                p_group = p_group.add(
                    Text::new(placement.title.clone())
                        .set("x", footprint.x_min + 0.5 * footprint.width())
                        .set("y", footprint.y_min + 0.5 * footprint.height())
                        .set("font-size", font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            group = group.add(p_group);
        }
        group
    };

    Document::new()
        .set(
            "viewBox",
            (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()),
        )
        .add(plot_group)
        .add(placements_group)
        .add(label)
}
