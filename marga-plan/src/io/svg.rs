//! SVG visualization for planning runs.
//!
//! Renders the occupancy map and planner output for inspection:
//! - Blocked cells of the map
//! - Explored RRT* tree edges (optional)
//! - Raw planned path and smoothed path
//! - Start and goal markers
//!
//! Coordinates are image pixels, so no Y flip is applied.

use std::fmt::Write;
use std::path::Path as FsPath;

use crate::core::{Path, Point};
use crate::error::Result;
use crate::grid::OccupancyMap;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Obstacle color
    pub obstacle: &'static str,
    /// Free space color
    pub free: &'static str,
    /// Tree edge color
    pub tree: &'static str,
    /// Raw path color
    pub path: &'static str,
    /// Smoothed path color
    pub smoothed_path: &'static str,
    /// Start marker color
    pub start: &'static str,
    /// Goal marker color
    pub goal: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            obstacle: "#333333",
            free: "#FFFFFF",
            tree: "#9999CC",
            path: "#AA2222",
            smoothed_path: "#22AA22",
            start: "#FF8800",
            goal: "#2222AA",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// SVG pixels per map cell
    pub scale: f32,
    /// Path line width
    pub path_width: f32,
    /// Tree edge line width
    pub tree_width: f32,
    /// Endpoint marker radius
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
    /// Padding around the map in pixels
    pub padding: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            path_width: 2.0,
            tree_width: 0.5,
            marker_radius: 5.0,
            colors: SvgColorScheme::default(),
            padding: 20.0,
        }
    }
}

/// SVG visualization builder
pub struct SvgVisualizer<'a> {
    config: SvgConfig,
    map: &'a OccupancyMap,
    title: Option<String>,
    tree_edges: Vec<(Point, Point)>,
    path: Option<Path>,
    smoothed_path: Option<Path>,
    endpoints: Option<(Point, Point)>,
}

impl<'a> SvgVisualizer<'a> {
    /// Create a new SVG visualizer
    pub fn new(map: &'a OccupancyMap, config: SvgConfig) -> Self {
        Self {
            config,
            map,
            title: None,
            tree_edges: Vec::new(),
            path: None,
            smoothed_path: None,
            endpoints: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add explored tree edges (parent, child)
    pub fn with_tree(mut self, edges: Vec<(Point, Point)>) -> Self {
        self.tree_edges = edges;
        self
    }

    /// Add the raw planned path
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = Some(path);
        self
    }

    /// Add the smoothed path
    pub fn with_smoothed_path(mut self, path: Path) -> Self {
        self.smoothed_path = Some(path);
        self
    }

    /// Mark start and goal
    pub fn with_endpoints(mut self, start: Point, goal: Point) -> Self {
        self.endpoints = Some((start, goal));
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> Result<String> {
        let mut svg = String::new();

        let map_width_px = self.map.width() as f32 * self.config.scale;
        let map_height_px = self.map.height() as f32 * self.config.scale;

        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let legend_height = 75.0;

        let width = map_width_px + 2.0 * padding;
        let height = map_height_px + 2.0 * padding + title_height + legend_height;

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(
            svg,
            r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##
        )?;

        if let Some(ref title) = self.title {
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                escape_xml(title)
            )?;
        }

        let map_offset_y = padding + title_height;
        writeln!(
            svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding, map_offset_y
        )?;

        self.render_grid(&mut svg)?;
        self.render_tree(&mut svg)?;
        // Smoothed path drawn last so it sits on top
        if let Some(ref path) = self.path {
            self.render_path(&mut svg, path, "path", self.config.colors.path)?;
        }
        if let Some(ref path) = self.smoothed_path {
            self.render_path(
                &mut svg,
                path,
                "smoothed-path",
                self.config.colors.smoothed_path,
            )?;
        }
        self.render_endpoints(&mut svg)?;

        writeln!(svg, "  </g>")?;

        self.render_legend(&mut svg, width, map_offset_y + map_height_px + 10.0)?;

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }

    /// Render blocked cells, one rect per horizontal run
    fn render_grid(&self, svg: &mut String) -> Result<()> {
        let cell = self.config.scale;

        writeln!(svg, r#"    <g id="grid">"#)?;
        writeln!(
            svg,
            r#"      <rect width="{:.1}" height="{:.1}" fill="{}"/>"#,
            self.map.width() as f32 * cell,
            self.map.height() as f32 * cell,
            self.config.colors.free
        )?;

        let mut run: Option<(i32, i32, i32)> = None; // (row, first col, last col)
        for coord in self.map.iter_blocked() {
            run = match run {
                Some((row, x0, x1)) if row == coord.y && x1 + 1 == coord.x => {
                    Some((row, x0, coord.x))
                }
                Some(done) => {
                    self.write_run(svg, done)?;
                    Some((coord.y, coord.x, coord.x))
                }
                None => Some((coord.y, coord.x, coord.x)),
            };
        }
        if let Some(done) = run {
            self.write_run(svg, done)?;
        }

        writeln!(svg, "    </g>")?;
        Ok(())
    }

    fn write_run(&self, svg: &mut String, (row, x0, x1): (i32, i32, i32)) -> Result<()> {
        let cell = self.config.scale;
        writeln!(
            svg,
            r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x0 as f32 * cell,
            row as f32 * cell,
            (x1 - x0 + 1) as f32 * cell,
            cell,
            self.config.colors.obstacle
        )?;
        Ok(())
    }

    /// Render explored tree edges
    fn render_tree(&self, svg: &mut String) -> Result<()> {
        if self.tree_edges.is_empty() {
            return Ok(());
        }

        let s = self.config.scale;
        writeln!(
            svg,
            r#"    <g id="tree" stroke="{}" stroke-width="{}" opacity="0.6">"#,
            self.config.colors.tree, self.config.tree_width
        )?;
        for (a, b) in &self.tree_edges {
            writeln!(
                svg,
                r#"      <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
                a.x * s,
                a.y * s,
                b.x * s,
                b.y * s
            )?;
        }
        writeln!(svg, "    </g>")?;
        Ok(())
    }

    /// Render a path polyline
    fn render_path(&self, svg: &mut String, path: &Path, id: &str, color: &str) -> Result<()> {
        if path.is_empty() {
            return Ok(());
        }

        let s = self.config.scale;
        let mut path_d = String::new();
        for (i, p) in path.points().iter().enumerate() {
            if i == 0 {
                write!(path_d, "M {:.1} {:.1}", p.x * s, p.y * s)?;
            } else {
                write!(path_d, " L {:.1} {:.1}", p.x * s, p.y * s)?;
            }
        }

        writeln!(svg, r#"    <g id="{}">"#, id)?;
        writeln!(
            svg,
            r#"      <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" opacity="0.8"/>"#,
            path_d, color, self.config.path_width
        )?;
        for p in path.points() {
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                p.x * s,
                p.y * s,
                self.config.path_width,
                color
            )?;
        }
        writeln!(svg, "    </g>")?;
        Ok(())
    }

    /// Render start and goal markers
    fn render_endpoints(&self, svg: &mut String) -> Result<()> {
        let Some((start, goal)) = self.endpoints else {
            return Ok(());
        };

        let s = self.config.scale;
        writeln!(svg, r#"    <g id="endpoints">"#)?;
        for (p, color, label) in [
            (start, self.config.colors.start, "S"),
            (goal, self.config.colors.goal, "G"),
        ] {
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"/>"#,
                p.x * s,
                p.y * s,
                self.config.marker_radius,
                color
            )?;
            writeln!(
                svg,
                r#"      <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="10" fill="{}" text-anchor="middle" dy="-8">{}</text>"#,
                p.x * s,
                p.y * s,
                color,
                label
            )?;
        }
        writeln!(svg, "    </g>")?;
        Ok(())
    }

    /// Render legend
    fn render_legend(&self, svg: &mut String, svg_width: f32, y_offset: f32) -> Result<()> {
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        )?;
        writeln!(
            svg,
            r##"    <rect x="10" y="0" width="{:.0}" height="65" fill="white" stroke="#CCC" stroke-width="1" rx="4"/>"##,
            svg_width - 20.0
        )?;

        let colors = &self.config.colors;
        let entries = [
            (!self.tree_edges.is_empty(), "Explored Tree", colors.tree),
            (self.path.is_some(), "Planned Path", colors.path),
            (self.smoothed_path.is_some(), "Smoothed Path", colors.smoothed_path),
        ];

        let mut entry_y = 20.0;
        for (shown, label, color) in entries {
            if !shown {
                continue;
            }
            writeln!(
                svg,
                r#"    <line x1="20" y1="{:.0}" x2="50" y2="{:.0}" stroke="{}" stroke-width="3"/>"#,
                entry_y, entry_y, color
            )?;
            writeln!(
                svg,
                r##"    <text x="60" y="{:.0}" fill="#333">{}</text>"##,
                entry_y + 4.0,
                label
            )?;
            entry_y += 20.0;
        }

        let map_legend_x = svg_width - 150.0;
        writeln!(
            svg,
            r#"    <rect x="{:.0}" y="10" width="15" height="15" fill="{}"/>"#,
            map_legend_x, colors.obstacle
        )?;
        writeln!(
            svg,
            r##"    <text x="{:.0}" y="22" fill="#333">Obstacles</text>"##,
            map_legend_x + 20.0
        )?;
        writeln!(
            svg,
            r##"    <rect x="{:.0}" y="30" width="15" height="15" fill="{}" stroke="#CCC"/>"##,
            map_legend_x, colors.free
        )?;
        writeln!(
            svg,
            r##"    <text x="{:.0}" y="42" fill="#333">Free</text>"##,
            map_legend_x + 20.0
        )?;

        writeln!(svg, "  </g>")?;
        Ok(())
    }

    /// Save to file
    pub fn save(&self, file: &FsPath) -> Result<()> {
        if let Some(parent) = file.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(file, self.render()?)?;
        log::info!("[Svg] wrote {}", file.display());
        Ok(())
    }
}

/// Escape text for use as XML character data or attribute values
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
