//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Scenario tests for parse_style

use ircstyle_stylecodec::{StyleFragment, StyleState, parse_style};

fn assert_fragment(
    fragment: &StyleFragment,
    state: StyleState,
    text: &str,
    start: usize,
    end: usize,
) {
    assert_eq!(*fragment.state(), state, "state of {:?}", fragment.text());
    assert_eq!(fragment.text(), text);
    assert_eq!(fragment.start(), start, "start of {:?}", text);
    assert_eq!(fragment.end(), end, "end of {:?}", text);
}

fn bold() -> StyleState {
    StyleState {
        bold: true,
        ..Default::default()
    }
}

#[test]
fn test_strips_control_codes() {
    let fragments = parse_style("text\x01with\x04control\x05codes", true);

    assert_eq!(fragments.len(), 1);
    assert_fragment(
        &fragments[0],
        StyleState::default(),
        "textwithcontrolcodes",
        0,
        20,
    );
}

#[test]
fn test_keeps_control_codes_when_not_stripping() {
    let input = "text\x01with\x04control\x05codes";
    let fragments = parse_style(input, false);

    assert_eq!(fragments.len(), 1);
    assert_fragment(&fragments[0], StyleState::default(), input, 0, 23);
}

#[test]
fn test_strips_line_breaks_and_tabs() {
    let fragments = parse_style("a\nb\tc", true);

    assert_eq!(fragments.len(), 1);
    assert_fragment(&fragments[0], StyleState::default(), "abc", 0, 3);
}

#[test]
fn test_keeps_line_breaks_when_not_stripping() {
    let fragments = parse_style("\x02a\nb\x02\tc", false);

    assert_eq!(fragments.len(), 2);
    assert_fragment(&fragments[0], bold(), "a\nb", 0, 3);
    assert_fragment(&fragments[1], StyleState::default(), "\tc", 3, 5);
}

#[test]
fn test_bold() {
    let fragments = parse_style("\x02bold", true);

    assert_eq!(fragments.len(), 1);
    assert_fragment(&fragments[0], bold(), "bold", 0, 4);
}

#[test]
fn test_text_color() {
    let fragments = parse_style("\x038yellowText", true);

    assert_eq!(fragments.len(), 1);
    assert_fragment(
        &fragments[0],
        StyleState {
            text_color: Some(8),
            ..Default::default()
        },
        "yellowText",
        0,
        10,
    );
}

#[test]
fn test_text_color_and_background() {
    let fragments = parse_style("\x034,8yellowBG redText", true);

    assert_eq!(fragments.len(), 1);
    assert_fragment(
        &fragments[0],
        StyleState {
            text_color: Some(4),
            bg_color: Some(8),
            ..Default::default()
        },
        "yellowBG redText",
        0,
        16,
    );
}

#[test]
fn test_italic() {
    let fragments = parse_style("\x1ditalic", true);

    assert_eq!(fragments.len(), 1);
    assert_fragment(
        &fragments[0],
        StyleState {
            italic: true,
            ..Default::default()
        },
        "italic",
        0,
        6,
    );
}

#[test]
fn test_underline_and_reverse() {
    let fragments = parse_style("\x1fu\x16r", true);

    assert_eq!(fragments.len(), 2);
    assert_fragment(
        &fragments[0],
        StyleState {
            underline: true,
            ..Default::default()
        },
        "u",
        0,
        1,
    );
    assert_fragment(
        &fragments[1],
        StyleState {
            underline: true,
            reverse: true,
            ..Default::default()
        },
        "r",
        1,
        2,
    );
}

#[test]
fn test_carries_state_forward() {
    let fragments = parse_style("\x02bold\x038yellow\x02nonBold\x03default", true);

    assert_eq!(fragments.len(), 4);
    assert_fragment(&fragments[0], bold(), "bold", 0, 4);
    assert_fragment(
        &fragments[1],
        StyleState {
            bold: true,
            text_color: Some(8),
            ..Default::default()
        },
        "yellow",
        4,
        10,
    );
    assert_fragment(
        &fragments[2],
        StyleState {
            text_color: Some(8),
            ..Default::default()
        },
        "nonBold",
        10,
        17,
    );
    assert_fragment(&fragments[3], StyleState::default(), "default", 17, 24);
}

#[test]
fn test_toggles_bold() {
    let fragments = parse_style("\x02bold\x02 \x02bold\x02", true);

    assert_eq!(fragments.len(), 3);
    assert_fragment(&fragments[0], bold(), "bold", 0, 4);
    assert_fragment(&fragments[1], StyleState::default(), " ", 4, 5);
    assert_fragment(&fragments[2], bold(), "bold", 5, 9);
}

#[test]
fn test_resets_all_styles() {
    let fragments = parse_style("\x02\x034\x16\x1d\x1ffull\x0fnone", true);

    assert_eq!(fragments.len(), 2);
    assert_fragment(
        &fragments[0],
        StyleState {
            bold: true,
            text_color: Some(4),
            bg_color: None,
            reverse: true,
            italic: true,
            underline: true,
        },
        "full",
        0,
        4,
    );
    assert_fragment(&fragments[1], StyleState::default(), "none", 4, 8);
}

#[test]
fn test_collapses_fragments() {
    let fragments = parse_style("\x031\x031,2\x031\x031,2\x031\x031,2\x03a", true);

    assert_eq!(fragments.len(), 1);
    assert_fragment(&fragments[0], StyleState::default(), "a", 0, 1);
}

#[test]
fn test_color_digits_consumed_without_stripping() {
    let fragments = parse_style("\x034,8x\x01y", false);

    assert_eq!(fragments.len(), 1);
    assert_fragment(
        &fragments[0],
        StyleState {
            text_color: Some(4),
            bg_color: Some(8),
            ..Default::default()
        },
        "x\x01y",
        0,
        3,
    );
}

#[test]
fn test_comma_without_foreground_is_text() {
    let fragments = parse_style("\x034a\x03,5b", true);

    assert_eq!(fragments.len(), 2);
    assert_fragment(
        &fragments[0],
        StyleState {
            text_color: Some(4),
            ..Default::default()
        },
        "a",
        0,
        1,
    );
    assert_fragment(&fragments[1], StyleState::default(), ",5b", 1, 4);
}
