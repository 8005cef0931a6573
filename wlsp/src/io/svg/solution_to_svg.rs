use crate::entities::{Instance, Solution};
use crate::eval;
use crate::io::svg::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Text, Title};

/// Draws the levels of a solution bottom-to-top inside the strip.
/// The opacity of every item is proportional to its weight.
pub fn solution_to_svg(
    instance: &Instance,
    solution: &Solution,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let mut solution = solution.clone();
    if options.normalize {
        solution.normalize(instance);
    }

    let theme = &options.theme;
    let width = instance.recipient_length;
    let height = solution.total_height(instance);
    let max_weight = instance.rects.iter().map(|r| r.weight).fold(0.0, f64::max);

    let margin = 0.05 * f64::max(width, height);
    let stroke_width = f64::max(width, height) * 0.001 * theme.stroke_width_multiplier;
    let font_size = 0.025 * f64::max(width, height);

    let label = {
        //print some information above the top left of the strip
        let content = format!(
            "cost: {:.3} | height: {:.3} | levels: {} | {}",
            eval::cost(instance, &solution),
            height,
            solution.n_levels(),
            title
        );
        Text::new(content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let strip = Rectangle::new()
        .set("x", 0.0)
        .set("y", 0.0)
        .set("width", width)
        .set("height", height)
        .set("fill", format!("{}", theme.strip_fill))
        .set("stroke", "black")
        .set("stroke-width", 2.0 * stroke_width);

    let mut items_group = Group::new().set("id", "items");
    let mut levels_group = Group::new().set("id", "levels");

    let heights = solution.level_heights(instance);
    let bases = solution.base_heights(instance);

    for (l, level) in solution.levels.iter().enumerate() {
        //svg y-axis points down, level 0 is drawn at the bottom
        let y_base = height - bases[l];
        let mut x = 0.0;
        for &i in level {
            let rect = instance.rect(i);
            let opacity = match max_weight > 0.0 {
                true => rect.weight / max_weight,
                false => 0.0,
            };
            let mut item = Group::new().set("id", format!("item_{i}")).add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y_base - rect.height)
                    .set("width", rect.length)
                    .set("height", rect.height)
                    .set("fill", format!("{}", theme.item_fill))
                    .set("fill-opacity", format!("{opacity:.3}"))
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width),
            );
            item = item.add(Title::new(format!(
                "item {i}, level: {l}, length: {:.3}, height: {:.3}, weight: {:.3}",
                rect.length, rect.height, rect.weight
            )));
            if options.item_labels {
                let size = 0.5 * f64::min(rect.length, rect.height);
                item = item.add(
                    Text::new(format!("{i}"))
                        .set("x", x + 0.5 * rect.length)
                        .set("y", y_base - 0.5 * rect.height)
                        .set("font-size", size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            items_group = items_group.add(item);
            x += rect.length;
        }
        if options.level_lines {
            let y_top = y_base - heights[l];
            levels_group = levels_group.add(
                Line::new()
                    .set("x1", 0.0)
                    .set("y1", y_top)
                    .set("x2", width)
                    .set("y2", y_top)
                    .set("stroke", format!("{}", theme.level_line_color))
                    .set("stroke-width", 1.5 * stroke_width),
            );
        }
    }

    Document::new()
        .set(
            "viewBox",
            (-margin, -margin - font_size, width + 2.0 * margin, height + 2.0 * margin + font_size),
        )
        .add(strip)
        .add(items_group)
        .add(levels_group)
        .add(label)
}
