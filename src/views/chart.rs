use crate::views::components::escape;

pub const CORRECT_COLOR: &str = "#4caf50";
pub const INCORRECT_COLOR: &str = "#f44336";

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const Y_TICKS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar<'a> {
    pub label: &'a str,
    pub correct: bool,
}

/// Bar chart of correctness bits with the y-axis pinned to [0, 1].
#[derive(Clone, Debug)]
pub struct BarChart<'a> {
    pub title: &'a str,
    pub y_label: &'a str,
    pub bars: Vec<Bar<'a>>,
}

impl BarChart<'_> {
    pub fn to_svg(&self) -> String {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_height;

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg class="chart" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img">"#,
            w = WIDTH,
            h = HEIGHT
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="30" text-anchor="middle" font-size="20">{}</text>"#,
            WIDTH / 2.0,
            escape(self.title)
        ));
        svg.push_str(&format!(
            r#"<text x="20" y="{y}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {y})">{}</text>"#,
            escape(self.y_label),
            y = MARGIN_TOP + plot_height / 2.0
        ));

        for tick in Y_TICKS {
            let y = baseline - tick * plot_height;
            svg.push_str(&format!(
                r#"<line x1="{x0}" y1="{y}" x2="{x1}" y2="{y}" stroke="currentColor" stroke-opacity="0.2"/><text x="{lx}" y="{ty}" text-anchor="end" font-size="12">{tick:.1}</text>"#,
                x0 = MARGIN_LEFT,
                x1 = MARGIN_LEFT + plot_width,
                lx = MARGIN_LEFT - 8.0,
                ty = y + 4.0,
            ));
        }

        if !self.bars.is_empty() {
            let slot = plot_width / self.bars.len() as f64;
            let bar_width = slot * 0.8;

            for (index, bar) in self.bars.iter().enumerate() {
                let value = if bar.correct { 1.0 } else { 0.0 };
                let bar_height = value * plot_height;
                let x = MARGIN_LEFT + slot * index as f64 + (slot - bar_width) / 2.0;
                let color = if bar.correct {
                    CORRECT_COLOR
                } else {
                    INCORRECT_COLOR
                };
                let label = escape(bar.label);

                svg.push_str(&format!(
                    r#"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{bar_height:.1}" fill="{color}" data-value="{v}"><title>{label}: {v}</title></rect>"#,
                    y = baseline - bar_height,
                    v = u8::from(bar.correct),
                ));
                svg.push_str(&format!(
                    r#"<text x="{cx:.1}" y="{ly}" text-anchor="middle" font-size="14">{label}</text>"#,
                    cx = x + bar_width / 2.0,
                    ly = baseline + 24.0,
                ));
            }
        }

        svg.push_str(&format!(
            r#"<line x1="{x}" y1="{t}" x2="{x}" y2="{b}" stroke="currentColor"/><line x1="{x}" y1="{b}" x2="{r}" y2="{b}" stroke="currentColor"/></svg>"#,
            x = MARGIN_LEFT,
            t = MARGIN_TOP,
            b = baseline,
            r = MARGIN_LEFT + plot_width,
        ));
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(bits: [bool; 3]) -> BarChart<'static> {
        let labels = ["Failure is:", "Challenges are:", "Effort is:"];
        BarChart {
            title: "Growth Mindset Quiz Results",
            y_label: "Correct Answers",
            bars: labels
                .into_iter()
                .zip(bits)
                .map(|(label, correct)| Bar { label, correct })
                .collect(),
        }
    }

    #[test]
    fn one_bar_per_question_colored_by_correctness() {
        let svg = chart([false, true, false]).to_svg();

        assert_eq!(svg.matches(r#"class="bar""#).count(), 3);
        assert_eq!(svg.matches(CORRECT_COLOR).count(), 1);
        assert_eq!(svg.matches(INCORRECT_COLOR).count(), 2);
    }

    #[test]
    fn axis_is_pinned_between_zero_and_one() {
        let svg = chart([true, true, true]).to_svg();

        assert!(svg.contains(">0.0</text>"));
        assert!(svg.contains(">1.0</text>"));
        assert!(!svg.contains(">1.2</text>"));
    }

    #[test]
    fn labels_and_title_are_rendered() {
        let svg = chart([true, false, true]).to_svg();

        assert!(svg.contains(&escape("Challenges are:")));
        assert!(svg.contains(&escape("Growth Mindset Quiz Results")));
        assert!(svg.contains(&escape("Correct Answers")));
    }

    #[test]
    fn incorrect_bar_has_zero_height() {
        let svg = chart([false, false, false]).to_svg();
        assert_eq!(svg.matches(r#"height="0.0""#).count(), 3);
    }
}
