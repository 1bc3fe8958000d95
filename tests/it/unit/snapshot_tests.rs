//! Snapshot tests using the insta crate.
//!
//! Snapshot testing pins the serde surface that front-ends consume: the
//! configuration file format and the view descriptions. Inline snapshots
//! keep the expected text next to the test.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::default_app;
use sortboard::settings::BoardConfig;

fn pretty(value: &impl serde::Serialize) -> String {
    serde_json::to_string_pretty(value).expect("serializable")
}

#[test]
fn snapshot_default_config() {
    insta::assert_snapshot!(pretty(&BoardConfig::default()), @r#"
    {
      "containers": [
        {
          "key": "left",
          "title": "Left List",
          "items": [
            "Item 1",
            "Item 2",
            "Item 3"
          ]
        },
        {
          "key": "right",
          "title": "Right List",
          "items": [
            "Item 4",
            "Item 5"
          ]
        }
      ],
      "allow_same_container_drop": true
    }
    "#);
}

#[test]
fn snapshot_idle_drag_visual() {
    let app = default_app();
    insta::assert_snapshot!(pretty(&app.drag_visual()), @r#"
    {
      "dragged_item": null,
      "is_over_accepting_target": false
    }
    "#);
}

#[test]
fn snapshot_container_view_during_hover() {
    let mut app = default_app();
    app.handle_drag_start("Item 2", "left");
    app.handle_container_enter("right");

    let views = app.container_views();
    insta::assert_snapshot!(pretty(&views[1]), @r#"
    {
      "key": "right",
      "title": "Right List",
      "items": [
        {
          "label": "Item 4",
          "is_dragging": false
        },
        {
          "label": "Item 5",
          "is_dragging": false
        }
      ],
      "is_hovered": true,
      "affordance": "WouldAccept"
    }
    "#);
}
