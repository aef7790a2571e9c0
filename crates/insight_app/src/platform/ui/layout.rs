use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::{MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH};

/// Named regions of the dashboard frame.
pub(crate) struct Surfaces {
    pub container: Rect,
    pub status: Rect,
}

pub(crate) fn surfaces(area: Rect) -> Surfaces {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    Surfaces {
        container: chunks[0],
        status: chunks[1],
    }
}

/// The chart canvas: a legend line above the plot area.
pub(crate) struct Canvas {
    pub legend: Rect,
    pub plot: Rect,
}

/// Splits the container interior into the chart canvas. Returns `None` when
/// the interior is too small to host it, which is a frame-structure defect
/// rather than a data defect.
pub(crate) fn canvas(inner: Rect) -> Option<Canvas> {
    if inner.width < MIN_CANVAS_WIDTH || inner.height < MIN_CANVAS_HEIGHT {
        return None;
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);
    Some(Canvas {
        legend: chunks[0],
        plot: chunks[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_sits_below_container() {
        let surfaces = surfaces(Rect::new(0, 0, 80, 24));
        assert_eq!(surfaces.container.height, 23);
        assert_eq!(surfaces.status.height, 1);
        assert_eq!(surfaces.status.y, 23);
    }

    #[test]
    fn undersized_interior_has_no_canvas() {
        assert!(canvas(Rect::new(0, 0, MIN_CANVAS_WIDTH - 1, 20)).is_none());
        assert!(canvas(Rect::new(0, 0, 80, MIN_CANVAS_HEIGHT - 1)).is_none());
    }

    #[test]
    fn canvas_reserves_one_legend_line() {
        let canvas = canvas(Rect::new(0, 0, 80, 20)).unwrap();
        assert_eq!(canvas.legend.height, 1);
        assert_eq!(canvas.plot.height, 19);
    }
}
