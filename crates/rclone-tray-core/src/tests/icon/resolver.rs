use crate::{
    IconResolver, Platform, ThemeMode, TrayError, frame_file_name, frame_resource_path,
    ids::{DARK_ICON, LIGHT_ICON},
    tests::support::{FakeResources, FakeThemeProbe},
};

use std::{path::Path, sync::Arc};

fn resolver(platform: Platform, probe: FakeThemeProbe) -> (IconResolver, Arc<FakeResources>) {
    let resources = Arc::new(FakeResources::default());
    let resolver = IconResolver::new(platform, Arc::new(probe), resources.clone());
    (resolver, resources)
}

fn host(value: Option<&str>) -> FakeThemeProbe {
    FakeThemeProbe {
        host: value.map(str::to_string),
        window: Some(ThemeMode::Light),
    }
}

fn window(theme: Option<ThemeMode>) -> FakeThemeProbe {
    FakeThemeProbe {
        host: Some("light".to_string()),
        window: theme,
    }
}

/// WHAT: Each theme maps to its fixed icon resource
/// WHY: The dark base icon and light variant must never be swapped
#[test]
fn given_theme_when_picking_icon_path_then_fixed_variant_returned() {
    // Given/When/Then: Both entries of the mapping
    assert_eq!(IconResolver::icon_path_for(ThemeMode::Dark), "icons/favicon/icon.png");
    assert_eq!(IconResolver::icon_path_for(ThemeMode::Light), "icons/favicon/icon-light.png");
}

/// WHAT: macOS asks the host, not the window
/// WHY: The window theme accessor is unreliable there
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_macos_and_light_host_when_resolving_then_light_icon() {
    // Given: Host says light, window would say light too but must be ignored
    let (resolver, _) = resolver(Platform::MacOs, host(Some("light")));

    // When: Resolving the icon
    let path = resolver.resolve_icon().await.unwrap();

    // Then: Light variant under the resource root
    assert_eq!(path, Path::new("/bundle").join(LIGHT_ICON));
}

/// WHAT: Any host answer other than light falls back to the dark icon
/// WHY: The dark variant stays visible on a dark menu bar
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_macos_and_unusable_host_answer_when_resolving_then_dark_icon() {
    for answer in [Some("dark"), Some(""), Some("sepia"), None] {
        // Given: Host answers dark, nothing, garbage, or fails
        let (resolver, _) = resolver(Platform::MacOs, host(answer));

        // When: Resolving the icon
        let path = resolver.resolve_icon().await.unwrap();

        // Then: Dark variant every time
        assert_eq!(path, Path::new("/bundle").join(DARK_ICON), "host answer {answer:?}");
    }
}

/// WHAT: Other platforms read the window theme
/// WHY: Window theme is authoritative outside macOS
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_windows_and_light_window_when_resolving_then_light_icon() {
    // Given: Host would say light but window says light as well
    let (resolver, _) = resolver(Platform::Windows, window(Some(ThemeMode::Light)));

    // When: Probing and resolving
    let theme = resolver.probe_theme().await.unwrap();
    let path = resolver.resolve_icon().await.unwrap();

    // Then: Light theme and light icon
    assert_eq!(theme, ThemeMode::Light);
    assert_eq!(path, Path::new("/bundle").join(LIGHT_ICON));
}

/// WHAT: A failing window probe reports ThemeProbeFailed but resolves dark
/// WHY: Probe errors are observable yet never reach icon resolution
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_failing_window_probe_when_resolving_then_error_kind_and_dark_icon() {
    // Given: Window theme query fails
    let (resolver, _) = resolver(Platform::Linux, window(None));

    // When: Probing directly and resolving
    let probe = resolver.probe_theme().await;
    let theme = resolver.current_theme().await;
    let path = resolver.resolve_icon().await.unwrap();

    // Then: Named error from the probe, dark everywhere else
    assert!(matches!(probe, Err(TrayError::ThemeProbeFailed { .. })));
    assert_eq!(theme, ThemeMode::Dark);
    assert_eq!(path, Path::new("/bundle").join(DARK_ICON));
}

/// WHAT: Missing icon resources surface as ResourceResolutionFailed
/// WHY: Callers skip the icon update instead of crashing
#[tokio::test]
async fn given_missing_icon_resource_when_resolving_then_resolution_error() {
    // Given: The dark icon is not bundled
    let (resolver, resources) = resolver(Platform::Windows, window(Some(ThemeMode::Dark)));
    resources.mark_missing(DARK_ICON);

    // When: Resolving
    let result = resolver.resolve_icon().await;

    // Then: Resolution error naming the path
    assert!(matches!(
        result,
        Err(TrayError::ResourceResolutionFailed { ref path, .. }) if path == DARK_ICON
    ));
}

/// WHAT: Frame names are two-digit zero padded
/// WHY: File names must match the bundled animation frames exactly
#[test]
fn given_frame_index_when_naming_then_zero_padded_file_name() {
    // Given/When/Then: Boundaries of the padding
    assert_eq!(frame_file_name(1), "frame_01_delay-0.1s.png");
    assert_eq!(frame_file_name(3), "frame_03_delay-0.1s.png");
    assert_eq!(frame_file_name(9), "frame_09_delay-0.1s.png");
    assert_eq!(frame_file_name(10), "frame_10_delay-0.1s.png");
    assert_eq!(frame_file_name(17), "frame_17_delay-0.1s.png");
}

/// WHAT: Index past the last frame wraps to the first
/// WHY: There is no frame_18 resource
#[test]
fn given_index_past_last_frame_when_naming_then_wraps_to_first() {
    // Given/When/Then: 18 becomes 1
    assert_eq!(frame_file_name(18), "frame_01_delay-0.1s.png");
    assert_eq!(
        frame_resource_path(18),
        "icons/favicon/frame_01_delay-0.1s.png"
    );
}
