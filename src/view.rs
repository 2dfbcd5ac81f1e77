use engine::prelude::*;

/// Glyph drawn at the viewer's position.
const VIEWER_CHAR: char = '@';

/// Draw the visibility grid as text.
///
/// Visible cells show their terrain, everything else is blank. Trailing
/// blanks on each line are trimmed.
pub fn render(fov: &FieldOfView, map: &TileMap, viewer: IVec2) -> String {
    let mut ret = String::new();

    for y in fov.top()..fov.top() + fov.height() {
        let line: String = (fov.left()..fov.left() + fov.width())
            .map(|x| {
                let p = ivec2(x, y);
                if p == viewer {
                    VIEWER_CHAR
                } else if fov.is_visible(p).unwrap_or(false) {
                    map.tile(p).glyph()
                } else {
                    ' '
                }
            })
            .collect();
        ret.push_str(line.trim_end());
        ret.push('\n');
    }

    ret
}
