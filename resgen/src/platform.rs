use strum::{EnumCount, EnumIter};

use std::path::PathBuf;

/// Which master image an output is derived from
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AssetKind {
    Icon,
    Splash,
}

/// A square icon, optionally cropped to a wide tile afterwards
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub name: &'static str,
    pub size: u32,
    pub crop_height: Option<u32>,
}

impl IconSpec {
    const fn square(name: &'static str, size: u32) -> Self {
        IconSpec {
            name,
            size,
            crop_height: None,
        }
    }

    const fn wide(name: &'static str, size: u32, height: u32) -> Self {
        IconSpec {
            name,
            size,
            crop_height: Some(height),
        }
    }

    /// Dimensions of the file left on disk once generation is done
    pub fn final_dimensions(&self) -> (u32, u32) {
        (self.size, self.crop_height.unwrap_or(self.size))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SplashSpec {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl SplashSpec {
    const fn new(name: &'static str, width: u32, height: u32) -> Self {
        SplashSpec {
            name,
            width,
            height,
        }
    }

    /// Edge length the master is scaled to before the centered crop
    pub fn longest_edge(&self) -> u32 {
        self.width.max(self.height)
    }
}

/// Supported targets, in the order they are processed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum Platform {
    Ios,
    Android,
    Windows,
}

impl Platform {
    pub fn len() -> usize {
        Self::COUNT
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Windows => "windows",
        }
    }

    /// Directory whose existence marks the platform as added to the project
    pub fn presence_path(&self) -> PathBuf {
        PathBuf::from("platforms").join(self.name())
    }

    pub fn icon_dir(&self) -> PathBuf {
        PathBuf::from("resources").join(self.name()).join("icon")
    }

    pub fn splash_dir(&self) -> PathBuf {
        PathBuf::from("resources").join(self.name()).join("splash")
    }

    pub fn icons(&self) -> &'static [IconSpec] {
        match self {
            Platform::Ios => IOS_ICONS,
            Platform::Android => ANDROID_ICONS,
            Platform::Windows => WINDOWS_ICONS,
        }
    }

    pub fn splashes(&self) -> &'static [SplashSpec] {
        match self {
            Platform::Ios => IOS_SPLASHES,
            Platform::Android => ANDROID_SPLASHES,
            Platform::Windows => WINDOWS_SPLASHES,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every platform in catalog order
pub fn list_platforms() -> Vec<Platform> {
    Platform::iter().collect()
}

const IOS_ICONS: &[IconSpec] = &[
    IconSpec::square("icon-40.png", 40),
    IconSpec::square("icon-40@2x.png", 80),
    IconSpec::square("icon-50.png", 50),
    IconSpec::square("icon-50@2x.png", 100),
    IconSpec::square("icon-50@3x.png", 120),
    IconSpec::square("icon-60.png", 60),
    IconSpec::square("icon-60@2x.png", 120),
    IconSpec::square("icon-60@3x.png", 180),
    IconSpec::square("icon-72.png", 72),
    IconSpec::square("icon-72@2x.png", 144),
    IconSpec::square("icon-76.png", 76),
    IconSpec::square("icon-76@2x.png", 152),
    IconSpec::square("icon-small.png", 29),
    IconSpec::square("icon-small@2x.png", 58),
    IconSpec::square("icon-small@3x.png", 87),
    IconSpec::square("icon.png", 57),
    IconSpec::square("icon@2x.png", 114),
    IconSpec::square("icon-83.5@2x.png", 167),
];

const IOS_SPLASHES: &[SplashSpec] = &[
    // iPhone
    SplashSpec::new("Default~iphone.png", 320, 480),
    SplashSpec::new("Default@2x~iphone.png", 640, 960),
    SplashSpec::new("Default-568h@2x~iphone.png", 640, 1136),
    SplashSpec::new("Default-667h.png", 750, 1334),
    SplashSpec::new("Default-736h.png", 1242, 2208),
    SplashSpec::new("Default-Landscape-736h.png", 2208, 1242),
    // iPad
    SplashSpec::new("Default-Portrait~ipad.png", 768, 1024),
    SplashSpec::new("Default-Portrait@2x~ipad.png", 1536, 2048),
    SplashSpec::new("Default-Portrait@~ipadpro.png", 2048, 2732),
    SplashSpec::new("Default-Landscape~ipad.png", 1024, 768),
    SplashSpec::new("Default-Landscape@2x~ipad.png", 2048, 1536),
    SplashSpec::new("Default-Landscape@~ipadpro.png", 2732, 2048),
];

const ANDROID_ICONS: &[IconSpec] = &[
    IconSpec::square("drawable-icon.png", 96),
    IconSpec::square("drawable-hdpi-icon.png", 72),
    IconSpec::square("drawable-ldpi-icon.png", 36),
    IconSpec::square("drawable-mdpi-icon.png", 48),
    IconSpec::square("drawable-xhdpi-icon.png", 96),
    IconSpec::square("drawable-xxhdpi-icon.png", 144),
    IconSpec::square("drawable-xxxhdpi-icon.png", 192),
];

const ANDROID_SPLASHES: &[SplashSpec] = &[
    // Landscape
    SplashSpec::new("drawable-land-ldpi-screen.png", 320, 200),
    SplashSpec::new("drawable-land-mdpi-screen.png", 480, 320),
    SplashSpec::new("drawable-land-hdpi-screen.png", 800, 480),
    SplashSpec::new("drawable-land-xhdpi-screen.png", 1280, 720),
    SplashSpec::new("drawable-land-xxhdpi-screen.png", 1600, 960),
    SplashSpec::new("drawable-land-xxxhdpi-screen.png", 1920, 1280),
    // Portrait
    SplashSpec::new("drawable-port-ldpi-screen.png", 200, 320),
    SplashSpec::new("drawable-port-mdpi-screen.png", 320, 480),
    SplashSpec::new("drawable-port-hdpi-screen.png", 480, 800),
    SplashSpec::new("drawable-port-xhdpi-screen.png", 720, 1280),
    SplashSpec::new("drawable-port-xxhdpi-screen.png", 960, 1600),
    SplashSpec::new("drawable-port-xxxhdpi-screen.png", 1280, 1920),
];

const WINDOWS_ICONS: &[IconSpec] = &[
    IconSpec::square("StoreLogo.scale-100.png", 50),
    IconSpec::square("StoreLogo.scale-125.png", 63),
    IconSpec::square("StoreLogo.scale-150.png", 75),
    IconSpec::square("StoreLogo.scale-200.png", 100),
    IconSpec::square("StoreLogo.scale-400.png", 200),
    IconSpec::square("Square44x44Logo.scale-100.png", 44),
    IconSpec::square("Square44x44Logo.scale-125.png", 55),
    IconSpec::square("Square44x44Logo.scale-150.png", 66),
    IconSpec::square("Square44x44Logo.scale-200.png", 88),
    IconSpec::square("Square44x44Logo.scale-400.png", 176),
    IconSpec::square("Square71x71Logo.scale-100.png", 71),
    IconSpec::square("Square71x71Logo.scale-125.png", 89),
    IconSpec::square("Square71x71Logo.scale-150.png", 107),
    IconSpec::square("Square71x71Logo.scale-200.png", 142),
    IconSpec::square("Square71x71Logo.scale-400.png", 284),
    IconSpec::square("Square150x150Logo.scale-100.png", 150),
    IconSpec::square("Square150x150Logo.scale-125.png", 188),
    IconSpec::square("Square150x150Logo.scale-150.png", 225),
    IconSpec::square("Square150x150Logo.scale-200.png", 300),
    IconSpec::square("Square150x150Logo.scale-400.png", 600),
    IconSpec::square("Square310x310Logo.scale-100.png", 310),
    IconSpec::square("Square310x310Logo.scale-125.png", 388),
    IconSpec::square("Square310x310Logo.scale-150.png", 465),
    IconSpec::square("Square310x310Logo.scale-200.png", 620),
    IconSpec::square("Square310x310Logo.scale-400.png", 1240),
    IconSpec::wide("Wide310x150Logo.scale-100.png", 310, 150),
    IconSpec::wide("Wide310x150Logo.scale-125.png", 388, 188),
    IconSpec::wide("Wide310x150Logo.scale-150.png", 465, 225),
    IconSpec::wide("Wide310x150Logo.scale-200.png", 620, 300),
    IconSpec::wide("Wide310x150Logo.scale-400.png", 1240, 600),
];

const WINDOWS_SPLASHES: &[SplashSpec] = &[
    SplashSpec::new("SplashScreen.scale-100.png", 620, 300),
    SplashSpec::new("SplashScreen.scale-125.png", 775, 375),
    SplashSpec::new("SplashScreen.scale-150.png", 930, 450),
    SplashSpec::new("SplashScreen.scale-200.png", 1240, 600),
    SplashSpec::new("SplashScreen.scale-400.png", 2480, 1200),
];
