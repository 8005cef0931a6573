use crate::entities::Rect;

/// The static (unmodifiable) representation of a problem instance:
/// a set of rectangles to be assigned to levels of a strip with fixed width.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// All items, indexed by their id
    pub rects: Vec<Rect>,
    /// Width of the strip, the capacity of every level
    pub recipient_length: f64,
}

impl Instance {
    pub fn new(rects: Vec<Rect>, recipient_length: f64) -> Self {
        Self {
            rects,
            recipient_length,
        }
    }

    pub fn n_items(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn rect(&self, id: usize) -> &Rect {
        &self.rects[id]
    }

    /// Height of a level containing `items`: the height of its tallest item
    pub fn level_height(&self, items: &[usize]) -> f64 {
        items
            .iter()
            .map(|&i| self.rect(i).height)
            .fold(0.0, f64::max)
    }

    /// Sum of the lengths of all items
    pub fn total_length(&self) -> f64 {
        self.rects.iter().map(|r| r.length).sum()
    }

    /// Lower bound on the number of levels any feasible solution requires
    pub fn min_levels(&self) -> usize {
        (self.total_length() / self.recipient_length).ceil() as usize
    }

    pub fn weight_stats(&self) -> MetricStats {
        MetricStats::from_values(self.rects.iter().map(|r| r.weight))
    }

    pub fn height_stats(&self) -> MetricStats {
        MetricStats::from_values(self.rects.iter().map(|r| r.height))
    }
}

/// Mean and (population) standard deviation of a metric over all items.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl MetricStats {
    pub fn from_values(values: impl Iterator<Item = f64> + Clone) -> Self {
        let n = values.clone().count();
        if n == 0 {
            return Self::default();
        }
        let mean = values.clone().sum::<f64>() / n as f64;
        let variance = values.map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}
